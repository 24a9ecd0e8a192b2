//! In-memory stand-in for the REST backend.
#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use async_trait::async_trait;
use placemark_boundary::{
    NewPlace, NewPlaceGroup, Page, Place, PlaceCategory, PlaceGroup, TrackIntersection,
};
use placemark_frontend_api::{ApiClient, ApiRequest, Error, Method, RawResponse, Result, Transport};
use serde::Serialize;
use url::form_urlencoded;

pub const NOW: &str = "2026-10-18T09:00:00Z";

#[derive(Default)]
pub struct Backend {
    places: Vec<Place>,
    groups: Vec<PlaceGroup>,
    next_id: u64,
    pub requests: Vec<ApiRequest>,
    pub offline: bool,
}

#[derive(Clone, Default)]
pub struct Fixture(pub Rc<RefCell<Backend>>);

impl Fixture {
    pub fn client(&self) -> ApiClient<Self> {
        ApiClient::new(self.clone())
    }

    pub fn last_request(&self) -> ApiRequest {
        self.0
            .borrow()
            .requests
            .last()
            .cloned()
            .expect("at least one request")
    }

    pub fn set_offline(&self, offline: bool) {
        self.0.borrow_mut().offline = offline;
    }
}

#[async_trait(?Send)]
impl Transport for Fixture {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut backend = self.0.borrow_mut();
        backend.requests.push(request.clone());
        if backend.offline {
            return Err(Error::Fetch("TypeError: Failed to fetch".into()));
        }
        Ok(backend.handle(&request))
    }
}

fn json<T: Serialize>(status: u16, body: &T) -> RawResponse {
    RawResponse {
        status,
        body: serde_json::to_string(body).unwrap(),
    }
}

fn error(status: u16, reason: &str, message: &str, path: &str) -> RawResponse {
    json(
        status,
        &serde_json::json!({
            "timestamp": NOW,
            "status": status,
            "error": reason,
            "message": message,
            "path": format!("/api{path}"),
        }),
    )
}

fn not_found(path: &str) -> RawResponse {
    error(404, "Not Found", "Resource not found", path)
}

fn bad_request(message: &str, path: &str) -> RawResponse {
    error(400, "Bad Request", message, path)
}

const fn no_content() -> RawResponse {
    RawResponse {
        status: 204,
        body: String::new(),
    }
}

fn paginate<T: Clone>(items: &[T], params: &HashMap<String, String>) -> Page<T> {
    let number: u32 = params.get("page").map_or(0, |p| p.parse().unwrap());
    let size: u32 = params.get("size").map_or(20, |s| s.parse().unwrap());
    let total = items.len() as u32;
    let total_pages = total.div_ceil(size);
    let content: Vec<T> = items
        .iter()
        .skip((number * size) as usize)
        .take(size as usize)
        .cloned()
        .collect();
    Page {
        empty: content.is_empty(),
        content,
        number,
        size,
        total_elements: u64::from(total),
        total_pages,
        first: number == 0,
        last: number + 1 >= total_pages,
    }
}

fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS: f64 = 6_371_000.0;
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS * a.sqrt().asin()
}

impl Backend {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("00000000-0000-4000-8000-{:012}", self.next_id)
    }

    fn place_category_filter(params: &HashMap<String, String>) -> Option<PlaceCategory> {
        params.get("category").map(|c| c.parse().unwrap())
    }

    fn places_by_category(&self, category: Option<PlaceCategory>) -> Vec<Place> {
        self.places
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect()
    }

    #[allow(clippy::too_many_lines)]
    fn handle(&mut self, request: &ApiRequest) -> RawResponse {
        let (path, query) = request
            .path
            .split_once('?')
            .unwrap_or((request.path.as_str(), ""));
        let params: HashMap<String, String> =
            form_urlencoded::parse(query.as_bytes()).into_owned().collect();
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, ["v1", "places"]) => {
                let places = self.places_by_category(Self::place_category_filter(&params));
                json(200, &paginate(&places, &params))
            }
            (Method::Get, ["v1", "places", "near"]) => {
                let (Some(lat), Some(lon), Some(radius)) = (
                    params.get("lat").and_then(|x| x.parse::<f64>().ok()),
                    params.get("lon").and_then(|x| x.parse::<f64>().ok()),
                    params.get("radiusMeters").and_then(|x| x.parse::<f64>().ok()),
                ) else {
                    return bad_request("lat, lon and radiusMeters are required", path);
                };
                let mut places: Vec<_> = self
                    .places_by_category(Self::place_category_filter(&params))
                    .into_iter()
                    .map(|p| (distance_meters(lat, lon, p.latitude, p.longitude), p))
                    .filter(|(d, _)| *d <= radius)
                    .collect();
                places.sort_by(|(a, _), (b, _)| a.total_cmp(b));
                let places: Vec<_> = places.into_iter().map(|(_, p)| p).collect();
                json(200, &paginate(&places, &params))
            }
            (Method::Post, ["v1", "places", "intersections"]) => {
                let Some(track) = request
                    .body
                    .as_deref()
                    .and_then(|b| serde_json::from_str::<TrackIntersection>(b).ok())
                else {
                    return bad_request("Malformed track", path);
                };
                let places: Vec<_> = self
                    .places_by_category(Self::place_category_filter(&params))
                    .into_iter()
                    .filter(|p| {
                        track.points.iter().any(|pt| {
                            distance_meters(pt.latitude, pt.longitude, p.latitude, p.longitude)
                                <= f64::from(p.visit_radius_meters)
                        })
                    })
                    .collect();
                json(200, &paginate(&places, &params))
            }
            (Method::Get, ["v1", "places", id]) => match self.places.iter().find(|p| p.id == *id) {
                Some(place) => json(200, place),
                None => not_found(path),
            },
            (Method::Post, ["v1", "places"]) => {
                let Some(new_place) = request
                    .body
                    .as_deref()
                    .and_then(|b| serde_json::from_str::<NewPlace>(b).ok())
                else {
                    return bad_request("Malformed place", path);
                };
                let NewPlace {
                    name,
                    description,
                    category,
                    latitude,
                    longitude,
                    visit_radius_meters,
                } = new_place;
                let place = Place {
                    id: self.next_id(),
                    name,
                    description,
                    category,
                    latitude,
                    longitude,
                    visit_radius_meters,
                    group_ids: vec![],
                    created_at: NOW.to_string(),
                    updated_at: NOW.to_string(),
                };
                self.places.push(place.clone());
                json(201, &place)
            }
            (Method::Delete, ["v1", "places", id]) => {
                let Some(pos) = self.places.iter().position(|p| p.id == *id) else {
                    return not_found(path);
                };
                self.places.remove(pos);
                for group in &mut self.groups {
                    group.place_ids.retain(|p| p != id);
                }
                no_content()
            }
            (Method::Get, ["v1", "groups"]) => json(200, &paginate(&self.groups, &params)),
            (Method::Get, ["v1", "groups", id]) => match self.groups.iter().find(|g| g.id == *id) {
                Some(group) => json(200, group),
                None => not_found(path),
            },
            (Method::Post, ["v1", "groups"]) => {
                let Some(NewPlaceGroup { name, description }) = request
                    .body
                    .as_deref()
                    .and_then(|b| serde_json::from_str(b).ok())
                else {
                    return bad_request("Malformed group", path);
                };
                let group = PlaceGroup {
                    id: self.next_id(),
                    name,
                    description,
                    place_ids: vec![],
                    created_at: NOW.to_string(),
                    updated_at: NOW.to_string(),
                };
                self.groups.push(group.clone());
                json(201, &group)
            }
            (Method::Delete, ["v1", "groups", id]) => {
                let Some(pos) = self.groups.iter().position(|g| g.id == *id) else {
                    return not_found(path);
                };
                self.groups.remove(pos);
                for place in &mut self.places {
                    place.group_ids.retain(|g| g != id);
                }
                no_content()
            }
            (method @ (Method::Post | Method::Delete), ["v1", "groups", group_id, "places", place_id]) => {
                let Some(place) = self.places.iter_mut().find(|p| p.id == *place_id) else {
                    return not_found(path);
                };
                let Some(group) = self.groups.iter_mut().find(|g| g.id == *group_id) else {
                    return not_found(path);
                };
                if method == Method::Post {
                    if !group.place_ids.iter().any(|p| p == place_id) {
                        group.place_ids.push((*place_id).to_string());
                        place.group_ids.push((*group_id).to_string());
                    }
                } else {
                    group.place_ids.retain(|p| p != place_id);
                    place.group_ids.retain(|g| g != group_id);
                }
                json(200, &*group)
            }
            _ => not_found(path),
        }
    }
}
