use super::{optional_phone, optional_url, required, FormErrors, FormFields};
use crate::repos::venues::{Venue, VenueInput};

/// Venue form as rendered: submitted or stored values, untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    /// Echo a submission back into the form.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.text("address"),
            phone: fields.text("phone"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            genres: fields.list("genres"),
            website_link: fields.text("website_link"),
            seeking_talent: seeking_talent(fields),
            seeking_description: fields.text("seeking_description"),
        }
    }

    /// Pre-populate the edit form.
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            genres: venue.genre_list(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn state_is(&self, state: &str) -> bool {
        self.state == state
    }

    /// Validate a submission into repository input.
    pub fn bind(fields: &FormFields) -> Result<VenueInput, FormErrors> {
        let mut errors = FormErrors::new();

        let name = required(fields, &mut errors, "name");
        let city = required(fields, &mut errors, "city");
        let state = required(fields, &mut errors, "state");
        let address = required(fields, &mut errors, "address");
        let phone = optional_phone(fields, &mut errors, "phone");
        let image_link = optional_url(fields, &mut errors, "image_link");
        let facebook_link = optional_url(fields, &mut errors, "facebook_link");
        let website_link = optional_url(fields, &mut errors, "website_link");

        errors.finish(VenueInput {
            name,
            city,
            state,
            address,
            phone,
            image_link,
            facebook_link,
            genres: fields.list("genres"),
            website_link,
            seeking_talent: seeking_talent(fields),
            seeking_description: fields.optional("seeking_description"),
        })
    }
}

// older forms posted the flag as `looking_for_talent`
fn seeking_talent(fields: &FormFields) -> bool {
    fields.checked("seeking_talent") || fields.checked("looking_for_talent")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_note() -> FormFields {
        FormFields::parse(
            b"name=The+Blue+Note&city=Nashville&state=TN&address=1+Music+Row\
              &phone=615-555-0100&genres=Jazz&genres=Blues&seeking_talent=y\
              &website_link=https%3A%2F%2Fbluenote.example",
        )
    }

    #[test]
    fn binds_complete_submission() {
        let input = VenueForm::bind(&blue_note()).unwrap();
        assert_eq!(input.name, "The Blue Note");
        assert_eq!(input.city, "Nashville");
        assert_eq!(input.state, "TN");
        assert_eq!(input.genres, vec!["Jazz", "Blues"]);
        assert!(input.seeking_talent);
        assert_eq!(input.website_link.as_deref(), Some("https://bluenote.example"));
        assert_eq!(input.facebook_link, None);
        assert_eq!(input.seeking_description, None);
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let errors = VenueForm::bind(&FormFields::parse(b"name=&city=Nashville")).unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("state").is_some());
        assert!(errors.get("address").is_some());
        assert!(errors.get("city").is_none());
    }

    #[test]
    fn unchecked_flag_is_false() {
        let fields = FormFields::parse(b"name=A&city=B&state=CA&address=C");
        assert!(!VenueForm::bind(&fields).unwrap().seeking_talent);
    }

    #[test]
    fn legacy_flag_name_is_accepted() {
        let fields = FormFields::parse(b"name=A&city=B&state=CA&address=C&looking_for_talent=True");
        assert!(VenueForm::bind(&fields).unwrap().seeking_talent);
    }

    #[test]
    fn echoes_submission() {
        let form = VenueForm::from_fields(&blue_note());
        assert_eq!(form.name, "The Blue Note");
        assert!(form.has_genre("Blues"));
        assert!(!form.has_genre("Folk"));
        assert!(form.seeking_talent);
    }
}
