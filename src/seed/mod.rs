//! Compiled-in seed datasets.
//!
//! These are the collections served before any admin has persisted changes.
//! They are read-time defaults only; listing a seeded collection never
//! writes it back.

use crate::models::{Category, Member, MemberRole, Project, Resource, ResourceKind};

pub fn initial_projects() -> Vec<Project> {
    vec![
        Project {
            id: "proj-borehole-ikorodu".to_string(),
            title: "Ikorodu Community Borehole".to_string(),
            description: "Drilled and commissioned a solar-powered borehole serving over \
                          400 households in Ikorodu North."
                .to_string(),
            date: "March 2024".to_string(),
            location: "Ikorodu, Lagos".to_string(),
            image_url: "https://images.niesat.org/projects/borehole-ikorodu.jpg".to_string(),
            category: Category::Water,
        },
        Project {
            id: "proj-ict-lab-epe".to_string(),
            title: "Epe Grammar School ICT Lab".to_string(),
            description: "Refurbished a 20-seat computer laboratory and trained teachers on \
                          the new equipment."
                .to_string(),
            date: "November 2023".to_string(),
            location: "Epe, Lagos".to_string(),
            image_url: "https://images.niesat.org/projects/ict-lab-epe.jpg".to_string(),
            category: Category::ICT,
        },
        Project {
            id: "proj-solar-badagry".to_string(),
            title: "Badagry Health Post Solar Install".to_string(),
            description: "Installed a 5kVA solar array with battery backup for the primary \
                          health post in Badagry West."
                .to_string(),
            date: "July 2023".to_string(),
            location: "Badagry, Lagos".to_string(),
            image_url: "https://images.niesat.org/projects/solar-badagry.jpg".to_string(),
            category: Category::Power,
        },
    ]
}

pub fn initial_members() -> Vec<Member> {
    vec![
        Member {
            id: "mem-chairman".to_string(),
            name: "Oluwaseun Bakare".to_string(),
            role: MemberRole::Executive,
            position: Some("Chairman".to_string()),
            department: "Mechanical Engineering".to_string(),
            state_code: "ME/2021/004".to_string(),
            image_url: "https://images.niesat.org/members/bakare.jpg".to_string(),
        },
        Member {
            id: "mem-gensec".to_string(),
            name: "Amaka Eze".to_string(),
            role: MemberRole::Executive,
            position: Some("General Secretary".to_string()),
            department: "Electrical Engineering".to_string(),
            state_code: "EE/2021/017".to_string(),
            image_url: "https://images.niesat.org/members/eze.jpg".to_string(),
        },
        Member {
            id: "mem-welfare".to_string(),
            name: "Ibrahim Suleiman".to_string(),
            role: MemberRole::Executive,
            position: Some("Welfare Officer".to_string()),
            department: "Civil Engineering".to_string(),
            state_code: "CE/2022/009".to_string(),
            image_url: "https://images.niesat.org/members/suleiman.jpg".to_string(),
        },
        Member {
            id: "mem-titi".to_string(),
            name: "Titilayo Ogunleye".to_string(),
            role: MemberRole::General,
            position: None,
            department: "Chemical Engineering".to_string(),
            state_code: "CH/2023/052".to_string(),
            image_url: "https://images.niesat.org/members/ogunleye.jpg".to_string(),
        },
    ]
}

pub fn initial_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "res-constitution".to_string(),
            title: "Chapter Constitution".to_string(),
            description: "The governing document of the chapter, last amended 2023.".to_string(),
            kind: ResourceKind::PDF,
            url: "https://files.niesat.org/constitution-2023.pdf".to_string(),
        },
        Resource {
            id: "res-minutes-template".to_string(),
            title: "Meeting Minutes Template".to_string(),
            description: "Standard template for recording general meeting minutes.".to_string(),
            kind: ResourceKind::DOC,
            url: "https://files.niesat.org/minutes-template.doc".to_string(),
        },
        Resource {
            id: "res-nse-portal".to_string(),
            title: "NSE Student Portal".to_string(),
            description: "National portal for student membership registration and dues."
                .to_string(),
            kind: ResourceKind::Link,
            url: "https://portal.nse.org.ng/students".to_string(),
        },
    ]
}
