use super::{optional_phone, optional_url, required, FormErrors, FormFields};
use crate::repos::artists::{Artist, ArtistInput};

/// Artist form as rendered: submitted or stored values, untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venues: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.text("phone"),
            genres: fields.list("genres"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            website_link: fields.text("website_link"),
            seeking_venues: seeking_venues(fields),
            seeking_description: fields.text("seeking_description"),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genre_list(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking_venues: artist.seeking_venues,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn state_is(&self, state: &str) -> bool {
        self.state == state
    }

    pub fn bind(fields: &FormFields) -> Result<ArtistInput, FormErrors> {
        let mut errors = FormErrors::new();

        let name = required(fields, &mut errors, "name");
        let city = required(fields, &mut errors, "city");
        let state = required(fields, &mut errors, "state");
        let phone = optional_phone(fields, &mut errors, "phone");
        let image_link = optional_url(fields, &mut errors, "image_link");
        let facebook_link = optional_url(fields, &mut errors, "facebook_link");
        let website_link = optional_url(fields, &mut errors, "website_link");

        errors.finish(ArtistInput {
            name,
            city,
            state,
            phone,
            genres: fields.list("genres"),
            image_link,
            facebook_link,
            website_link,
            seeking_venues: seeking_venues(fields),
            seeking_description: fields.optional("seeking_description"),
        })
    }
}

// `seeking_venue` and `looking_for_venues` are older names for the same checkbox
fn seeking_venues(fields: &FormFields) -> bool {
    ["seeking_venues", "seeking_venue", "looking_for_venues"]
        .iter()
        .any(|name| fields.checked(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_artist() {
        let fields = FormFields::parse(
            b"name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll&seeking_venues=y",
        );
        let input = ArtistForm::bind(&fields).unwrap();
        assert_eq!(input.name, "Guns N Petals");
        assert_eq!(input.genres, vec!["Rock n Roll"]);
        assert!(input.seeking_venues);
        assert_eq!(input.phone, None);
    }

    #[test]
    fn rejects_bad_links() {
        let fields = FormFields::parse(b"name=A&city=B&state=CA&facebook_link=not+a+url");
        let errors = ArtistForm::bind(&fields).unwrap_err();
        assert_eq!(errors.get("facebook_link"), Some("Invalid URL."));
    }

    #[test]
    fn pre_populates_from_artist() {
        let artist = Artist {
            id: 4,
            name: "Matt Quevedo".into(),
            city: "New York".into(),
            state: "NY".into(),
            phone: Some("300-400-5000".into()),
            genres: Some("Jazz".into()),
            image_link: None,
            facebook_link: None,
            website_link: None,
            seeking_venues: false,
            seeking_description: None,
        };
        let form = ArtistForm::from_artist(&artist);
        assert_eq!(form.phone, "300-400-5000");
        assert!(form.has_genre("Jazz"));
        assert_eq!(form.website_link, "");
    }
}
