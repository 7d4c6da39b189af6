//! Grouping of venues by (city, state) for the venues page.

/// One (city, state) group and the venues located in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items by (city, state); areas and their members keep first-appearance order.
pub fn group_by_area<T, F>(items: Vec<T>, key: F) -> Vec<Area<T>>
where
    F: Fn(&T) -> (String, String),
{
    let mut areas: Vec<Area<T>> = Vec::new();
    for item in items {
        let (city, state) = key(&item);
        match areas
            .iter_mut()
            .find(|a| a.city == city && a.state == state)
        {
            Some(area) => area.venues.push(item),
            None => areas.push(Area {
                city,
                state,
                venues: vec![item],
            }),
        }
    }
    areas
}
