//! DTOs for venues_sea adapter.

/// Every editable venue column, in stored form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFields {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: String,
    pub seeking_description: Option<String>,
}
