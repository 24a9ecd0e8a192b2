use placemark_boundary::{NewPlaceGroup, Page, PlaceGroup};

use crate::{
    path_segment, ApiClient, FetchTransport, Method, Query, Result, Transport, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl GroupQuery {
    fn to_query(self) -> Query {
        Query::new()
            .param("page", Some(self.page.unwrap_or(DEFAULT_PAGE)))
            .param("size", Some(self.size.unwrap_or(DEFAULT_PAGE_SIZE)))
    }
}

/// Place groups API
#[derive(Debug, Clone, Copy)]
pub struct GroupApi<T = FetchTransport> {
    client: ApiClient<T>,
}

impl GroupApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self::with_client(ApiClient::new(FetchTransport::new(url)))
    }
}

impl<T> GroupApi<T>
where
    T: Transport,
{
    pub const fn with_client(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &GroupQuery) -> Result<Page<PlaceGroup>> {
        let path = query.to_query().to_path("/v1/groups");
        self.client.fetch(Method::Get, &path).await
    }

    pub async fn get(&self, id: &str) -> Result<PlaceGroup> {
        let path = format!("/v1/groups/{}", path_segment(id));
        self.client.fetch(Method::Get, &path).await
    }

    pub async fn create(&self, group: &NewPlaceGroup) -> Result<PlaceGroup> {
        self.client.send_json(Method::Post, "/v1/groups", group).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        let path = format!("/v1/groups/{}", path_segment(id));
        self.client.send_empty(Method::Delete, &path).await
    }

    /// Returns the group after the place has been added.
    pub async fn add_place(&self, group_id: &str, place_id: &str) -> Result<PlaceGroup> {
        let path = membership_path(group_id, place_id);
        self.client.fetch(Method::Post, &path).await
    }

    /// Returns the group after the place has been removed.
    pub async fn remove_place(&self, group_id: &str, place_id: &str) -> Result<PlaceGroup> {
        let path = membership_path(group_id, place_id);
        self.client.fetch(Method::Delete, &path).await
    }
}

fn membership_path(group_id: &str, place_id: &str) -> String {
    format!(
        "/v1/groups/{}/places/{}",
        path_segment(group_id),
        path_segment(place_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_query() {
        assert_eq!(GroupQuery::default().to_query().to_string(), "page=0&size=20");
        let query = GroupQuery {
            page: Some(3),
            size: Some(100),
        };
        assert_eq!(query.to_query().to_string(), "page=3&size=100");
    }

    #[test]
    fn membership() {
        assert_eq!(membership_path("g1", "p1"), "/v1/groups/g1/places/p1");
    }
}
