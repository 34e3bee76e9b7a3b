//! Resume documents — the singleton profile record behind `/myprofile/{id}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePhoto {
    /// Web location of the photo on the front page splash.
    pub location: String,
    #[serde(rename = "heightpx")]
    pub height_px: i32,
    #[serde(rename = "widthpx")]
    pub width_px: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileContact {
    #[serde(rename = "fblink")]
    pub fb_link: String,
    #[serde(rename = "gmaillink")]
    pub gmail_link: String,
    #[serde(rename = "linkedlink")]
    pub linked_link: String,
    #[serde(rename = "gitlink")]
    pub git_link: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub start: String,
    pub end: String,
    pub degree: String,
    #[serde(rename = "sdegree")]
    pub short_degree: String,
    #[serde(rename = "govnbody")]
    pub govn_body: String,
    pub desc: String,
    #[serde(rename = "sdesc")]
    pub short_desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    /// Self-assessed proficiency, 0–100, drives the skill bar width.
    pub level: u8,
    pub desc: String,
    pub span: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accolade {
    pub title: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(rename = "imgsrc")]
    pub img_src: String,
    #[serde(rename = "imght")]
    pub img_ht: i32,
    #[serde(rename = "imgwd")]
    pub img_wd: i32,
    #[serde(rename = "desig")]
    pub designation: String,
    pub employer: String,
    pub span: String,
}

/// The profile document. One per external id; created by the seed routine
/// and read on profile-page requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    /// External identifier used in `/myprofile/{id}`, not the store's own key.
    pub id: String,
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub photo: ProfilePhoto,
    #[serde(rename = "shortdesc")]
    pub short_desc: String,
    #[serde(rename = "shortdescsm")]
    pub short_desc_sm: String,
    /// Contact fields are stored inline on the resume document.
    #[serde(flatten)]
    pub contact: ProfileContact,
    #[serde(rename = "educ")]
    pub education: Education,
    #[serde(rename = "skills")]
    pub top_skills: Vec<Skill>,
    pub accolades: Vec<Accolade>,
    pub experience: Vec<WorkExperience>,
}
