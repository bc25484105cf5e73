use super::{Id, Insert, Patch, Record, non_empty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub availability: Option<Vec<String>>,
}

impl Record for Volunteer {
    const KIND: &'static str = "volunteer";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub availability: Option<Vec<String>>,
}

impl NewVolunteer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_availability<I, S>(mut self, availability: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability = Some(availability.into_iter().map(Into::into).collect());
        self
    }
}

impl Insert for NewVolunteer {
    type Output = Volunteer;

    /// Tag lists are kept as supplied, even when empty.
    fn into_record(self, id: Id) -> Volunteer {
        Volunteer {
            id,
            name: self.name,
            email: self.email,
            phone: non_empty(self.phone),
            skills: self.skills,
            availability: self.availability,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub skills: Option<Option<Vec<String>>>,
    pub availability: Option<Option<Vec<String>>>,
}

impl Patch<Volunteer> for VolunteerPatch {
    fn apply(self, volunteer: &mut Volunteer) {
        if let Some(name) = self.name {
            volunteer.name = name;
        }
        if let Some(email) = self.email {
            volunteer.email = email;
        }
        if let Some(phone) = self.phone {
            volunteer.phone = phone;
        }
        if let Some(skills) = self.skills {
            volunteer.skills = skills;
        }
        if let Some(availability) = self.availability {
            volunteer.availability = availability;
        }
    }
}
