use crate::app::error::WeatherError;

pub const LOCATION_NOT_PROVIDED: &str = "Coordinates, city/state/country, or zip code not provided";

/// Location as received from the caller. Any subset of fields may be set, but
/// at least one complete [`LocationForm`] has to be present to query the provider.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationForm<'a> {
    Coordinates { lat: f64, lon: f64 },
    Place { city: &'a str, state: &'a str, country: &'a str },
    Zip(&'a str),
}

impl LocationQuery {
    #[cfg(test)]
    pub fn coordinates(lat: f64, lon: f64) -> Self {
        LocationQuery { lat: Some(lat), lon: Some(lon), ..Default::default() }
    }

    #[cfg(test)]
    pub fn place(city: &str, state: &str, country: &str) -> Self {
        LocationQuery {
            city: Some(city.to_owned()),
            state: Some(state.to_owned()),
            country: Some(country.to_owned()),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn zip(zip: &str) -> Self {
        LocationQuery { zip: Some(zip.to_owned()), ..Default::default() }
    }

    /// First complete form, coordinates before place before zip.
    pub fn form(&self) -> Option<LocationForm<'_>> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Some(LocationForm::Coordinates { lat, lon });
        }

        if let (Some(city), Some(state), Some(country)) = (&self.city, &self.state, &self.country) {
            return Some(LocationForm::Place { city, state, country });
        }

        self.zip.as_deref().map(LocationForm::Zip)
    }

    pub fn validate(&self) -> Result<LocationForm<'_>, WeatherError> {
        self.form().ok_or_else(|| WeatherError::invalid_location(LOCATION_NOT_PROVIDED))
    }
}
