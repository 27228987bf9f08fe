//! Six-record sample directory used to seed a fresh source.

use super::profiles::{Address, Experience, Profile, DEFAULT_AVATAR};

fn address(street: &str, city: &str, zip_code: &str, country: &str) -> Address {
    Address {
        street: street.into(),
        city: city.into(),
        zip_code: zip_code.into(),
        country: country.into(),
    }
}

fn job(role: &str, company: &str, period: &str, description: &str) -> Experience {
    Experience {
        role: role.into(),
        company: company.into(),
        period: period.into(),
        description: description.into(),
    }
}

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn sample_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "p1".into(),
            name: "John Smith".into(),
            email: "john.smith@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            title: "Senior Software Engineer".into(),
            company: "Tech Innovations Inc.".into(),
            description: "Experienced software engineer with a passion for building scalable web applications. Specializes in React, Node.js, and cloud architecture. Has led multiple teams to deliver successful products.".into(),
            avatar: DEFAULT_AVATAR.into(),
            address: address("123 Tech Avenue", "San Francisco", "94105", "USA"),
            skills: skills(&["React", "Node.js", "TypeScript", "AWS", "Docker"]),
            experience: vec![
                job("Senior Software Engineer", "Tech Innovations Inc.", "2020 - Present", "Leading development of cloud-based solutions and mentoring junior developers."),
                job("Software Engineer", "WebSolutions Co.", "2017 - 2020", "Developed and maintained multiple client-facing web applications."),
            ],
        },
        Profile {
            id: "p2".into(),
            name: "Emily Johnson".into(),
            email: "emily.johnson@example.com".into(),
            phone: "+1 (555) 987-6543".into(),
            title: "UX/UI Designer".into(),
            company: "Creative Designs LLC".into(),
            description: "Creative designer with an eye for detail and user experience. Specializes in creating intuitive and visually appealing interfaces for web and mobile applications.".into(),
            avatar: DEFAULT_AVATAR.into(),
            address: address("456 Design Boulevard", "New York", "10001", "USA"),
            skills: skills(&["UI Design", "UX Research", "Figma", "Adobe XD", "Prototyping"]),
            experience: vec![
                job("UX/UI Designer", "Creative Designs LLC", "2019 - Present", "Creating user-centered designs for various clients across different industries."),
                job("Junior Designer", "ArtWorks Studio", "2016 - 2019", "Assisted in designing marketing materials and basic web interfaces."),
            ],
        },
        Profile {
            id: "p3".into(),
            name: "Michael Chen".into(),
            email: "michael.chen@example.com".into(),
            phone: "+1 (555) 456-7890".into(),
            title: "Data Scientist".into(),
            company: "DataMinds Analytics".into(),
            description: "Data scientist with expertise in machine learning and statistical analysis. Passionate about turning data into actionable insights and solving complex business problems.".into(),
            avatar: DEFAULT_AVATAR.into(),
            address: address("789 Analytics Drive", "Boston", "02108", "USA"),
            skills: skills(&["Python", "Machine Learning", "SQL", "Data Visualization", "TensorFlow"]),
            experience: vec![
                job("Data Scientist", "DataMinds Analytics", "2018 - Present", "Developing predictive models and performing data analysis for clients in finance and healthcare."),
                job("Data Analyst", "FinTech Solutions", "2015 - 2018", "Analyzed financial data and created reports for internal stakeholders."),
            ],
        },
        Profile {
            id: "p4".into(),
            name: "Sarah Rodriguez".into(),
            email: "sarah.rodriguez@example.com".into(),
            phone: "+1 (555) 789-0123".into(),
            title: "Marketing Manager".into(),
            company: "Global Brands Inc.".into(),
            description: "Strategic marketing professional with experience in digital marketing, brand management, and campaign development. Skilled in creating marketing strategies that drive growth and engagement.".into(),
            avatar: DEFAULT_AVATAR.into(),
            address: address("321 Marketing Street", "Chicago", "60601", "USA"),
            skills: skills(&["Digital Marketing", "SEO", "Content Strategy", "Social Media", "Analytics"]),
            experience: vec![
                job("Marketing Manager", "Global Brands Inc.", "2019 - Present", "Managing marketing campaigns and overseeing brand strategy for multiple product lines."),
                job("Marketing Specialist", "Retail Enterprises", "2016 - 2019", "Executed marketing initiatives and assisted in campaign development."),
            ],
        },
        Profile {
            id: "p5".into(),
            name: "David Kim".into(),
            email: "david.kim@example.com".into(),
            phone: "+1 (555) 234-5678".into(),
            title: "Product Manager".into(),
            company: "Innovate Solutions".into(),
            description: "Product manager with a background in software development. Experienced in leading cross-functional teams and delivering user-centered products that meet business objectives.".into(),
            avatar: DEFAULT_AVATAR.into(),
            address: address("567 Product Lane", "Seattle", "98101", "USA"),
            skills: skills(&["Product Strategy", "Agile", "User Stories", "Roadmapping", "Market Research"]),
            experience: vec![
                job("Product Manager", "Innovate Solutions", "2020 - Present", "Leading product development from conception to launch, working with engineering and design teams."),
                job("Associate Product Manager", "Tech Startups Co.", "2017 - 2020", "Assisted in feature prioritization and gathered user feedback for product improvements."),
            ],
        },
        Profile {
            id: "p6".into(),
            name: "Lisa Thompson".into(),
            email: "lisa.thompson@example.com".into(),
            phone: "+1 (555) 345-6789".into(),
            title: "HR Director".into(),
            company: "Corporate Enterprises".into(),
            description: "Human resources professional with expertise in talent acquisition, employee relations, and organizational development. Committed to creating positive workplace cultures and effective HR strategies.".into(),
            avatar: DEFAULT_AVATAR.into(),
            address: address("890 HR Avenue", "Atlanta", "30303", "USA"),
            skills: skills(&["Recruitment", "Employee Relations", "Training & Development", "HR Policy", "Conflict Resolution"]),
            experience: vec![
                job("HR Director", "Corporate Enterprises", "2018 - Present", "Overseeing all HR functions and developing strategic initiatives to improve employee engagement and retention."),
                job("HR Manager", "Business Solutions Inc.", "2014 - 2018", "Managed recruitment processes and handled employee relations issues."),
            ],
        },
    ]
}
