use placemark_boundary::{NewPlace, NewPlaceGroup, PlaceCategory, TrackPoint};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 4000;

const MAX_RADIUS_METERS: f64 = i32::MAX as f64;

pub trait Validate {
    type Valid;
    type Error;
    fn validate(&self) -> Result<Self::Valid, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Invalidation {
    #[error("Name is required.")]
    NameRequired,
    #[error("Name must be at most {} characters.", MAX_NAME_LEN)]
    NameTooLong,
    #[error("Description must be at most {} characters.", MAX_DESCRIPTION_LEN)]
    DescriptionTooLong,
    #[error("Latitude must be between -90 and 90.")]
    Latitude,
    #[error("Longitude must be between -180 and 180.")]
    Longitude,
    #[error("Visit radius must be a positive integer.")]
    VisitRadius,
    #[error("Radius must be a positive integer.")]
    SearchRadius,
    #[error("Place ID is required.")]
    PlaceIdRequired,
    #[error("Track must contain at least one point.")]
    EmptyTrack,
}

pub fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

pub fn is_valid_longitude(lng: f64) -> bool {
    (-180.0..=180.0).contains(&lng)
}

fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Returns the trimmed name.
pub fn name(raw: &str) -> Result<String, Invalidation> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Invalidation::NameRequired);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Invalidation::NameTooLong);
    }
    Ok(name.to_owned())
}

/// The length limit applies to the raw input,
/// but only the trimmed text is submitted.
pub fn description(raw: &str) -> Result<Option<String>, Invalidation> {
    if raw.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(Invalidation::DescriptionTooLong);
    }
    let description = raw.trim();
    Ok((!description.is_empty()).then(|| description.to_owned()))
}

pub fn latitude(raw: &str) -> Result<f64, Invalidation> {
    parse_number(raw)
        .filter(|lat| is_valid_latitude(*lat))
        .ok_or(Invalidation::Latitude)
}

pub fn longitude(raw: &str) -> Result<f64, Invalidation> {
    parse_number(raw)
        .filter(|lng| is_valid_longitude(*lng))
        .ok_or(Invalidation::Longitude)
}

/// Accepts whole numbers greater than zero, e.g. `50` or `50.0`.
pub fn positive_integer(raw: &str) -> Option<u32> {
    let n = parse_number(raw)?;
    if n.fract() != 0.0 || n <= 0.0 || n > MAX_RADIUS_METERS {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(n as u32)
}

pub fn visit_radius(raw: &str) -> Result<u32, Invalidation> {
    positive_integer(raw).ok_or(Invalidation::VisitRadius)
}

pub fn search_radius(raw: &str) -> Result<u32, Invalidation> {
    positive_integer(raw).ok_or(Invalidation::SearchRadius)
}

pub fn place_id(raw: &str) -> Result<String, Invalidation> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(Invalidation::PlaceIdRequired);
    }
    Ok(id.to_owned())
}

pub fn track(points: &[TrackPoint]) -> Result<(), Invalidation> {
    if points.is_empty() {
        return Err(Invalidation::EmptyTrack);
    }
    for TrackPoint {
        latitude,
        longitude,
    } in points
    {
        if !is_valid_latitude(*latitude) {
            return Err(Invalidation::Latitude);
        }
        if !is_valid_longitude(*longitude) {
            return Err(Invalidation::Longitude);
        }
    }
    Ok(())
}

/// Raw user input of the place creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceForm {
    pub name: String,
    pub description: String,
    pub category: PlaceCategory,
    pub latitude: String,
    pub longitude: String,
    pub visit_radius_meters: String,
}

impl Default for PlaceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: PlaceCategory::Landmark,
            latitude: String::new(),
            longitude: String::new(),
            visit_radius_meters: "50".to_string(),
        }
    }
}

impl Validate for PlaceForm {
    type Valid = NewPlace;
    type Error = Invalidation;
    fn validate(&self) -> Result<Self::Valid, Self::Error> {
        let name = name(&self.name)?;
        let description = description(&self.description)?;
        let latitude = latitude(&self.latitude)?;
        let longitude = longitude(&self.longitude)?;
        let visit_radius_meters = visit_radius(&self.visit_radius_meters)?;
        Ok(NewPlace {
            name,
            description,
            category: self.category,
            latitude,
            longitude,
            visit_radius_meters,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupForm {
    pub name: String,
    pub description: String,
}

impl Validate for GroupForm {
    type Valid = NewPlaceGroup;
    type Error = Invalidation;
    fn validate(&self) -> Result<Self::Valid, Self::Error> {
        let name = name(&self.name)?;
        let description = description(&self.description)?;
        Ok(NewPlaceGroup { name, description })
    }
}

/// Raw user input of the radius search form.
#[derive(Debug, Clone, PartialEq)]
pub struct NearForm {
    pub lat: String,
    pub lon: String,
    pub radius_meters: String,
    pub category: Option<PlaceCategory>,
}

impl Default for NearForm {
    fn default() -> Self {
        Self {
            lat: String::new(),
            lon: String::new(),
            radius_meters: "500".to_string(),
            category: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearSearch {
    pub lat: f64,
    pub lon: f64,
    pub radius_meters: u32,
    pub category: Option<PlaceCategory>,
}

impl Validate for NearForm {
    type Valid = NearSearch;
    type Error = Invalidation;
    fn validate(&self) -> Result<Self::Valid, Self::Error> {
        let lat = latitude(&self.lat)?;
        let lon = longitude(&self.lon)?;
        let radius_meters = search_radius(&self.radius_meters)?;
        Ok(NearSearch {
            lat,
            lon,
            radius_meters,
            category: self.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_place_form() -> PlaceForm {
        PlaceForm {
            name: "  Old Town ".into(),
            description: String::new(),
            category: PlaceCategory::Museum,
            latitude: "45.0".into(),
            longitude: "12.0".into(),
            visit_radius_meters: "50".into(),
        }
    }

    #[test]
    fn name_test() {
        assert_eq!(name(""), Err(Invalidation::NameRequired));
        assert_eq!(name("   "), Err(Invalidation::NameRequired));
        assert_eq!(name(" Old Town "), Ok("Old Town".to_string()));
        assert!(name(&"x".repeat(200)).is_ok());
        assert_eq!(name(&"x".repeat(201)), Err(Invalidation::NameTooLong));
        // surrounding whitespace does not count
        assert!(name(&format!("  {}  ", "x".repeat(200))).is_ok());
        // characters, not bytes
        assert!(name(&"ä".repeat(200)).is_ok());
    }

    #[test]
    fn description_test() {
        assert_eq!(description(""), Ok(None));
        assert_eq!(description("  \n "), Ok(None));
        assert_eq!(description(" nice "), Ok(Some("nice".to_string())));
        assert!(description(&"x".repeat(4000)).is_ok());
        assert_eq!(
            description(&"x".repeat(4001)),
            Err(Invalidation::DescriptionTooLong)
        );
        // the raw length is checked
        assert_eq!(
            description(&format!(" {} ", "x".repeat(3999))),
            Err(Invalidation::DescriptionTooLong)
        );
    }

    #[test]
    fn latitude_test() {
        assert_eq!(latitude("90"), Ok(90.0));
        assert_eq!(latitude("-90"), Ok(-90.0));
        assert_eq!(latitude(" 45.5 "), Ok(45.5));
        assert_eq!(latitude("0"), Ok(0.0));
        for raw in ["91", "-91", "90.000001", "abc", "", " ", "NaN", "inf"] {
            assert_eq!(latitude(raw), Err(Invalidation::Latitude), "{raw}");
        }
    }

    #[test]
    fn longitude_test() {
        assert_eq!(longitude("180"), Ok(180.0));
        assert_eq!(longitude("-180"), Ok(-180.0));
        for raw in ["181", "-180.5", "east", ""] {
            assert_eq!(longitude(raw), Err(Invalidation::Longitude), "{raw}");
        }
    }

    #[test]
    fn radius_test() {
        assert_eq!(visit_radius("1"), Ok(1));
        assert_eq!(visit_radius("50"), Ok(50));
        assert_eq!(visit_radius("50.0"), Ok(50));
        for raw in ["0", "-5", "2.5", "abc", "", "1e12"] {
            assert_eq!(visit_radius(raw), Err(Invalidation::VisitRadius), "{raw}");
        }
        assert_eq!(search_radius("0"), Err(Invalidation::SearchRadius));
        assert_eq!(
            Invalidation::SearchRadius.to_string(),
            "Radius must be a positive integer."
        );
    }

    #[test]
    fn place_id_test() {
        assert_eq!(place_id("  "), Err(Invalidation::PlaceIdRequired));
        assert_eq!(place_id(" p1 "), Ok("p1".to_string()));
    }

    #[test]
    fn track_test() {
        assert_eq!(track(&[]), Err(Invalidation::EmptyTrack));
        let p = |latitude, longitude| TrackPoint {
            latitude,
            longitude,
        };
        assert!(track(&[p(45.0, 12.0), p(45.1, 12.1)]).is_ok());
        assert_eq!(track(&[p(45.0, 12.0), p(95.0, 12.0)]), Err(Invalidation::Latitude));
        assert_eq!(track(&[p(45.0, 200.0)]), Err(Invalidation::Longitude));
    }

    #[test]
    fn validate_place_form() {
        let new_place = valid_place_form().validate().unwrap();
        assert_eq!(
            new_place,
            NewPlace {
                name: "Old Town".into(),
                description: None,
                category: PlaceCategory::Museum,
                latitude: 45.0,
                longitude: 12.0,
                visit_radius_meters: 50,
            }
        );
    }

    #[test]
    fn first_failing_place_rule_wins() {
        let form = PlaceForm {
            name: String::new(),
            latitude: "91".into(),
            visit_radius_meters: "0".into(),
            ..valid_place_form()
        };
        assert_eq!(form.validate(), Err(Invalidation::NameRequired));

        let form = PlaceForm {
            longitude: "181".into(),
            visit_radius_meters: "0".into(),
            ..valid_place_form()
        };
        assert_eq!(form.validate(), Err(Invalidation::Longitude));

        let form = PlaceForm {
            description: "x".repeat(4001),
            latitude: "abc".into(),
            ..valid_place_form()
        };
        assert_eq!(form.validate(), Err(Invalidation::DescriptionTooLong));

        let form = PlaceForm {
            visit_radius_meters: "2.5".into(),
            ..valid_place_form()
        };
        assert_eq!(form.validate(), Err(Invalidation::VisitRadius));
    }

    #[test]
    fn default_place_form() {
        let form = PlaceForm::default();
        assert_eq!(form.category, PlaceCategory::Landmark);
        assert_eq!(form.visit_radius_meters, "50");
        assert_eq!(form.validate(), Err(Invalidation::NameRequired));
    }

    #[test]
    fn validate_group_form() {
        let form = GroupForm {
            name: " Weekend ".into(),
            description: " trip ".into(),
        };
        assert_eq!(
            form.validate(),
            Ok(NewPlaceGroup {
                name: "Weekend".into(),
                description: Some("trip".into()),
            })
        );
        assert_eq!(
            GroupForm::default().validate(),
            Err(Invalidation::NameRequired)
        );
    }

    #[test]
    fn validate_near_form() {
        let form = NearForm {
            lat: "45".into(),
            lon: "12".into(),
            ..NearForm::default()
        };
        assert_eq!(
            form.validate(),
            Ok(NearSearch {
                lat: 45.0,
                lon: 12.0,
                radius_meters: 500,
                category: None,
            })
        );
        let form = NearForm {
            lat: "45".into(),
            lon: "12".into(),
            radius_meters: "-5".into(),
            category: Some(PlaceCategory::Park),
        };
        assert_eq!(form.validate(), Err(Invalidation::SearchRadius));
        assert_eq!(NearForm::default().validate(), Err(Invalidation::Latitude));
    }
}
