//! Sample postings the board starts with.

use chrono::NaiveDate;

use super::domain::{AdminContact, Project, ProjectId, TeamMember};

fn on(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn member(name: &str, role: &str, avatar: u8) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        avatar: format!("https://i.pravatar.cc/150?img={avatar}"),
    }
}

fn contact(name: &str, department: &str, email: &str, avatar: u8) -> AdminContact {
    AdminContact {
        name: name.to_string(),
        department: department.to_string(),
        email: email.to_string(),
        avatar: format!("https://i.pravatar.cc/150?img={avatar}"),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId(1),
            title: "AI-Powered Campus Navigation System".to_string(),
            description: "Develop a mobile app that uses AI to help students navigate the campus efficiently.".to_string(),
            full_description: Some(
                "This project aims to create an innovative navigation system for our university campus. \
                 The application will use computer vision and machine learning to recognize buildings, \
                 pathways, and points of interest. Students will be able to use the app to find the best \
                 routes between classes, locate resources, and discover campus events. The system should \
                 work both indoors and outdoors, and should be accessible to students with disabilities."
                    .to_string(),
            ),
            tags: strings(&["Mobile Development", "AI/ML", "UX Design"]),
            deadline: on(2025, 5, 15),
            posted_on: on(2025, 4, 1),
            team_size: 4,
            team_members: vec![member("Alex Johnson", "ML Engineer", 11)],
            is_admin: true,
            progress: Some(25),
            requirements: strings(&[
                "Experience with mobile development (React Native or Flutter preferred)",
                "Knowledge of machine learning frameworks like TensorFlow or PyTorch",
                "Understanding of accessibility standards",
                "Ability to work collaboratively in a team environment",
            ]),
            admin_contact: Some(contact(
                "Dr. Sarah Williams",
                "Computer Science Department",
                "s.williams@university.edu",
                32,
            )),
        },
        Project {
            id: ProjectId(2),
            title: "Sustainable Campus Waste Management".to_string(),
            description: "Create a system to track and optimize waste management across campus buildings.".to_string(),
            full_description: Some(
                "Our university is committed to becoming more sustainable. This project focuses on \
                 developing a comprehensive waste management tracking system that will monitor waste \
                 collection across campus, identify trends, and suggest improvements. The team will need \
                 to develop IoT sensors for waste bins, a backend system for data processing, and a \
                 user-friendly dashboard for facilities management."
                    .to_string(),
            ),
            tags: strings(&["IoT", "Data Analysis", "Sustainability"]),
            deadline: on(2025, 6, 20),
            posted_on: on(2025, 4, 2),
            team_size: 5,
            team_members: vec![
                member("Emily Chen", "IoT Specialist", 5),
                member("Marcus Lee", "Data Analyst", 12),
            ],
            is_admin: true,
            progress: Some(10),
            requirements: strings(&[
                "Experience with IoT devices and sensors",
                "Knowledge of data visualization and analytics",
                "Interest in environmental sustainability",
                "Basic understanding of database management",
            ]),
            admin_contact: Some(contact(
                "Prof. James Garcia",
                "Environmental Engineering",
                "j.garcia@university.edu",
                33,
            )),
        },
        Project {
            id: ProjectId(3),
            title: "Virtual Study Group Platform".to_string(),
            description: "Build a platform that connects students for virtual study sessions based on courses and schedules.".to_string(),
            full_description: None,
            tags: strings(&["Web Development", "UX/UI", "Backend"]),
            deadline: on(2025, 5, 30),
            posted_on: on(2025, 4, 3),
            team_size: 3,
            team_members: vec![member("Jordan Smith", "Frontend Developer", 3)],
            is_admin: false,
            progress: None,
            requirements: Vec::new(),
            admin_contact: None,
        },
        Project {
            id: ProjectId(4),
            title: "AR Chemistry Lab Simulator".to_string(),
            description: "Create an augmented reality app that allows students to practice chemistry experiments virtually.".to_string(),
            full_description: None,
            tags: strings(&["AR/VR", "3D Modeling", "Education"]),
            deadline: on(2025, 7, 10),
            posted_on: on(2025, 4, 4),
            team_size: 4,
            team_members: Vec::new(),
            is_admin: true,
            progress: None,
            requirements: Vec::new(),
            admin_contact: None,
        },
        Project {
            id: ProjectId(5),
            title: "Peer-to-Peer Textbook Exchange".to_string(),
            description: "Develop a secure platform for students to buy, sell, and trade textbooks on campus.".to_string(),
            full_description: None,
            tags: strings(&["Web Development", "E-commerce", "Database"]),
            deadline: on(2025, 6, 5),
            posted_on: on(2025, 4, 5),
            team_size: 4,
            team_members: vec![
                member("Taylor Reed", "Backend Developer", 7),
                member("Sam Washington", "UI Designer", 9),
                member("Jamie Park", "Database Specialist", 29),
            ],
            is_admin: false,
            progress: None,
            requirements: Vec::new(),
            admin_contact: None,
        },
        Project {
            id: ProjectId(6),
            title: "Mental Health Support App".to_string(),
            description: "Build a mobile application that provides mental health resources and support for students.".to_string(),
            full_description: None,
            tags: strings(&["Mobile Development", "Health", "UX Design"]),
            deadline: on(2025, 7, 25),
            posted_on: on(2025, 4, 6),
            team_size: 3,
            team_members: Vec::new(),
            is_admin: true,
            progress: None,
            requirements: Vec::new(),
            admin_contact: None,
        },
    ]
}
