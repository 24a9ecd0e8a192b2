use placemark_boundary::{NewPlace, Page, Place, PlaceCategory, TrackIntersection};

use crate::{
    path_segment, ApiClient, FetchTransport, Method, Query, Result, Transport, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub category: Option<PlaceCategory>,
}

impl PlaceQuery {
    fn to_query(self) -> Query {
        let Self {
            page,
            size,
            category,
        } = self;
        Query::new()
            .param("page", Some(page.unwrap_or(DEFAULT_PAGE)))
            .param("size", Some(size.unwrap_or(DEFAULT_PAGE_SIZE)))
            .param("category", category)
    }
}

/// Radius search around a coordinate.
///
/// Distance computation and ordering is done by the server.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearQuery {
    pub lat: f64,
    pub lon: f64,
    pub radius_meters: u32,
    pub category: Option<PlaceCategory>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl NearQuery {
    #[must_use]
    pub const fn new(lat: f64, lon: f64, radius_meters: u32) -> Self {
        Self {
            lat,
            lon,
            radius_meters,
            category: None,
            page: None,
            size: None,
        }
    }

    fn to_query(self) -> Query {
        let Self {
            lat,
            lon,
            radius_meters,
            category,
            page,
            size,
        } = self;
        Query::new()
            .param("lat", Some(lat))
            .param("lon", Some(lon))
            .param("radiusMeters", Some(radius_meters))
            .param("page", Some(page.unwrap_or(DEFAULT_PAGE)))
            .param("size", Some(size.unwrap_or(DEFAULT_PAGE_SIZE)))
            .param("category", category)
    }
}

/// Places API
#[derive(Debug, Clone, Copy)]
pub struct PlaceApi<T = FetchTransport> {
    client: ApiClient<T>,
}

impl PlaceApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self::with_client(ApiClient::new(FetchTransport::new(url)))
    }
}

impl<T> PlaceApi<T>
where
    T: Transport,
{
    pub const fn with_client(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PlaceQuery) -> Result<Page<Place>> {
        let path = query.to_query().to_path("/v1/places");
        self.client.fetch(Method::Get, &path).await
    }

    pub async fn get(&self, id: &str) -> Result<Place> {
        let path = format!("/v1/places/{}", path_segment(id));
        self.client.fetch(Method::Get, &path).await
    }

    pub async fn create(&self, place: &NewPlace) -> Result<Place> {
        self.client.send_json(Method::Post, "/v1/places", place).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        let path = format!("/v1/places/{}", path_segment(id));
        self.client.send_empty(Method::Delete, &path).await
    }

    pub async fn near(&self, query: &NearQuery) -> Result<Page<Place>> {
        let path = query.to_query().to_path("/v1/places/near");
        self.client.fetch(Method::Get, &path).await
    }

    /// Places whose visit radius intersects the given track.
    pub async fn intersecting_track(
        &self,
        track: &TrackIntersection,
        query: &PlaceQuery,
    ) -> Result<Page<Place>> {
        let path = query.to_query().to_path("/v1/places/intersections");
        self.client.send_json(Method::Post, &path, track).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_place_query() {
        assert_eq!(PlaceQuery::default().to_query().to_string(), "page=0&size=20");
    }

    #[test]
    fn place_query_with_category() {
        let query = PlaceQuery {
            page: Some(2),
            size: Some(5),
            category: Some(PlaceCategory::Restaurant),
        };
        assert_eq!(
            query.to_query().to_string(),
            "page=2&size=5&category=RESTAURANT"
        );
    }

    #[test]
    fn near_query() {
        let query = NearQuery::new(45.0, 12.5, 500);
        assert_eq!(
            query.to_query().to_string(),
            "lat=45&lon=12.5&radiusMeters=500&page=0&size=20"
        );
        let query = NearQuery {
            category: Some(PlaceCategory::Park),
            page: Some(1),
            ..NearQuery::new(-33.9, 151.2, 1)
        };
        assert_eq!(
            query.to_query().to_string(),
            "lat=-33.9&lon=151.2&radiusMeters=1&page=1&size=20&category=PARK"
        );
    }
}
