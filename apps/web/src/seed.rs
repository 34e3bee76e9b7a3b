//! Static seed data and the reseed routine. Reseeding flushes both
//! collections and reloads these records; anything written since the last
//! seed is lost.

use mongodb::Database;
use tracing::{error, info};

use crate::models::blog::{Blog, BlogRef};
use crate::models::resume::{
    Accolade, Education, ProfileContact, ProfilePhoto, Resume, Skill, WorkExperience,
};
use crate::store::blog::BlogStore;
use crate::store::resume::ResumeStore;

/// Flushes the store and loads the seed records. Per-item failures are
/// logged and the loop continues; a half-seeded database beats an empty one.
pub async fn seed_database(db: &Database) {
    let resumes = ResumeStore::new(db);
    let blogs = BlogStore::new(db);

    if let Err(err) = resumes.flush().await {
        error!(error = %err, "failed to flush the resume collection");
    }
    if let Err(err) = blogs.flush().await {
        error!(error = %err, "failed to flush the blogs collection");
    }

    match resumes.add(&resume_seed()).await {
        Ok(()) => info!("seeded the resume document"),
        Err(err) => error!(error = %err, "failed to seed the resume document"),
    }

    let mut seeded = 0;
    for mut blog in blog_seed() {
        if let Err(err) = blogs.add(&mut blog).await {
            error!(error = %err, title = %blog.title, "failed to add seed blog");
            continue;
        }
        seeded += 1;
    }
    info!(count = seeded, "seeded blog documents");
}

pub fn resume_seed() -> Resume {
    Resume {
        id: "niranjanawati".to_string(),
        full_name: "Niranjan Awati".to_string(),
        photo: ProfilePhoto {
            location: "/images/meb_w.jpg".to_string(),
            height_px: 140,
            width_px: 140,
        },
        short_desc: "Seasoned Go Lang developer with solid 18 years of total experience. An avid IoT junkie, building prototype \
            solutions atop single board computers for their sensing capabilities & cloud connectivity. He is adept at \
            developing containerized REST API for the web & concurrent applications on IoT devices using Go Lang. He has \
            also, in his past contributed extensively to learning functions of his organization."
            .to_string(),
        short_desc_sm: "Seasoned Go Lang developer with solid 18 years of total experience. An avid IoT junkie,He is adept at \
            developing containerized REST API for the web & concurrent applications on IoT devices using Go Lang."
            .to_string(),
        contact: ProfileContact {
            fb_link: "https://www.facebook.com/kneerunjun/".to_string(),
            gmail_link: "mailto:kneerunjun@gmail.com?subject=Reference to your online profile"
                .to_string(),
            linked_link: "https://www.linkedin.com/in/niranjan-awati-a2395856/".to_string(),
            git_link: "https://github.com/kneerunjun".to_string(),
            phone: "+91 8390302623".to_string(),
            email: "kneerunjun@gmail.com".to_string(),
            address: "Sangria, Megapolis Hinjewadi Phase-III, Pune 411057".to_string(),
        },
        education: Education {
            start: "2000".to_string(),
            end: "2004".to_string(),
            degree: "Bachelor of Engineering, Mechanical".to_string(),
            short_degree: "B.E. Mechanical".to_string(),
            govn_body: "University of Pune".to_string(),
            desc: "Pursued a 4y bachelor's degree at Maharashtra Institute Technology,Pune. Internal combustion engines as the elective subject in the final year & graduate trainee stint at TATA motors in the year 2004."
                .to_string(),
            short_desc: "Pursued a 4y bachelor's degree at Maharashtra Institute Technology,Pune."
                .to_string(),
        },
        top_skills: vec![
            skill("GoLang", 85, "Building REST API over HTTP, programming IoT u-controllers using TinyGo", "2017-today"),
            skill("Docker", 70, "Deep exposure to docker, docker-componse in building portable/scalable apps.", "2018-today"),
            skill("AngularJs", 60, "Can build single page, responsive apps from ground up.", "2016-2021"),
            skill("Python", 60, "Can build single page, responsive apps from ground up.", "2016-2021"),
        ],
        accolades: vec![
            Accolade { title: "M.V.P, Infosys".to_string(), year: "2007".to_string() },
            Accolade { title: "Pride, Boeing".to_string(), year: "2008".to_string() },
            Accolade { title: "Pride, Boeing".to_string(), year: "2009".to_string() },
        ],
        experience: vec![
            work("/images/infy_logo.png", 40, 60, "Pr. Consultant", "Infosys Ltd.", "2005-2022"),
            work("/images/dheeti.jpeg", 45, 40, "Sr. Developer", "Dheeti Technologies", "2022-2022"),
            work("/images/ncs_logo.png", 45, 50, "Sr. Programmer", "NCS Technologies", "2022-2023"),
            work("/images/persistent_logo.png", 45, 50, "Sr. Architect", "Persistent", "2023-today"),
        ],
    }
}

/// All the blogs were written across multiple sites; this gets them under
/// one roof. https://kneerunjun.wordpress.com/
pub fn blog_seed() -> Vec<Blog> {
    vec![
        blog(
            "/images/rpicloseup.jpg",
            "Reading LM35 with RaspberryPi using amplified RC timer",
            "When measuring low level analogue voltages would you use a chip or roll up your own. Say you are onto a prototype, what would be your choice?",
            &["iot", "rctimer", "raspberrypi", "lm35", "temperature"],
            &[
                ("Raspberry Pi in teaching", "https://www.raspberrypi.org/teach/"),
                ("Maximum amperage thru a Raspberry Pi", "https://raspberrypi.stackexchange.com/questions/9298/what-is-the-maximum-current-the-gpio-pins-can-output"),
                ("RC charging circuit", "https://www.electronics-tutorials.ws/rc/rc_1.html"),
                ("Raspberry Pi computers aboard the International Space Station (ISS).", "https://astro-pi.org/"),
            ],
            "25-OCT-2016",
        ),
        blog(
            "/images/angularjs.png",
            "Tabby Tab Angular tab-control in a jiffy!",
            "Tabs aren't a popular choice when it comes to mobile-first design. Just incase you need an angularjs directive to get an array of tabs up and running in no time",
            &["webdev", "angularjs", "re-usecontrols", "frontend", "javascript"],
            &[("Source code on GitHub", "https://github.com/kneerunjun/tabby-tab")],
            "25-SEP-2015",
        ),
        blog(
            "/images/angularphoto.jpg",
            "Angular directive with conditional transclusion & discrete compile",
            "Bending your mind around the 'deep-sea' concepts of Angualrjs. Rarely used in common scenarious but can make your life a tad bit easier when understood.",
            &["webdev", "angularjs", "re-usecontrols", "frontend", "javascript"],
            &[("Source code on GitHub", "https://github.com/kneerunjun/tabby-tab")],
            "14-FEB-2016",
        ),
        blog(
            "/images/angularrelativity.png",
            "That relativity of angular broadcasts",
            "Caution when using $broadcast( ) in AngularJS",
            &["webdev", "angularjs", "re-usecontrols", "frontend", "javascript"],
            &[("GithubGist", "https://gist.github.com/kneerunjun/7d95d3c1db15c1e62352")],
            "07-NOV-2015",
        ),
        blog(
            "/images/dockershipping.png",
            "Testing Django apps live on docker containers",
            "On how to quickstart setting up docker containers for Django Apps. Sounds very basic but a couple of easy pitfalls can waste a lot of effort.",
            &["webdev", "docker", "django", "python", "devops"],
            &[("GithubGist", "https://gist.github.com/kneerunjun/7d95d3c1db15c1e62352")],
            "04-MAR-2017",
        ),
        blog(
            "images/helppage.jpg",
            "Help page ecosystem for your angular SPAs",
            "Everyone needs help pages, its so frustrating to not find any when required the most. Here is how you can jumpstart",
            &["angularjs", "webdev"],
            &[("Single Page Applications, MDN glossary", "https://developer.mozilla.org/en-US/docs/Glossary/SPA")],
            "04-MAR-2017",
        ),
        blog(
            "images/purebool.png",
            "Binding pure boolean values to scope of isolated Angular directives",
            "",
            &["angularjs", "webdev"],
            &[("Single Page Applications, MDN glossary", "https://developer.mozilla.org/en-US/docs/Glossary/SPA")],
            "28-NOV-2015",
        ),
        blog(
            "images/raspwifi.jpg",
            "Autoconnect WiFi on Raspbian Stretch",
            "Unless you are a beginner you'd be running raspbian on headless mode on all your Pis. Here is how you can auto connect WiFi on your device on setup.",
            &["raspberrypi", "wifi", "network"],
            &[],
            "05-JUN-2018",
        ),
    ]
}

fn blog(
    cover_img: &str,
    title: &str,
    summary: &str,
    tags: &[&str],
    references: &[(&str, &str)],
    pub_date: &str,
) -> Blog {
    Blog {
        cover_img: cover_img.to_string(),
        slug: String::new(),
        title: title.to_string(),
        summary: summary.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        references: references
            .iter()
            .map(|(text, link)| BlogRef {
                text: text.to_string(),
                link: link.to_string(),
            })
            .collect(),
        pub_date: pub_date.to_string(),
        pub_loc: "Pune, India".to_string(),
        author_name: "Niranjan Awati".to_string(),
        about_author: "Niranjan is an IoT junkie & GoLang developer".to_string(),
        author_email: "kneerunjun@gmail.com".to_string(),
    }
}

fn skill(title: &str, level: u8, desc: &str, span: &str) -> Skill {
    Skill {
        title: title.to_string(),
        level,
        desc: desc.to_string(),
        span: span.to_string(),
    }
}

fn work(
    img_src: &str,
    img_ht: i32,
    img_wd: i32,
    designation: &str,
    employer: &str,
    span: &str,
) -> WorkExperience {
    WorkExperience {
        img_src: img_src.to_string(),
        img_ht,
        img_wd,
        designation: designation.to_string(),
        employer: employer.to_string(),
        span: span.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::slugify;
    use std::collections::HashSet;

    #[test]
    fn test_every_seed_title_slugifies() {
        for blog in blog_seed() {
            assert!(
                slugify(&blog.title).is_ok(),
                "seed title '{}' cannot be slugified",
                blog.title
            );
        }
    }

    #[test]
    fn test_seed_slugs_are_distinct() {
        // A full seed pass must admit every item; two titles abridging to
        // the same slug would make the second insert fail.
        let slugs: Vec<String> = blog_seed()
            .iter()
            .map(|b| slugify(&b.title).unwrap())
            .collect();
        let unique: HashSet<&String> = slugs.iter().collect();
        assert_eq!(unique.len(), slugs.len(), "duplicate seed slugs: {slugs:?}");
    }

    #[test]
    fn test_seed_slugs_assigned_at_insert_only() {
        for blog in blog_seed() {
            assert!(blog.slug.is_empty());
        }
    }

    #[test]
    fn test_resume_seed_has_external_id() {
        assert_eq!(resume_seed().id, "niranjanawati");
    }
}
