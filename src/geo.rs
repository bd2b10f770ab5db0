use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

use crate::model::Event;

/// Map center used when no event can be placed (lat, lng)
pub const DEFAULT_CENTER: (f64, f64) = (31.5, 34.47);

/// True if the coordinates are finite and inside WGS84 range
#[inline(always)]
pub fn is_placeable(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

/// Bounding box of placed events
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) * 0.5,
            (self.min_lng + self.max_lng) * 0.5,
        )
    }

    fn extend(&mut self, lat: f64, lng: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lng = self.min_lng.min(lng);
        self.max_lng = self.max_lng.max(lng);
    }
}

pub fn bounds<'a, I>(events: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut out: Option<Bounds> = None;
    for e in events {
        let (lat, lng) = (e.location.lat, e.location.lng);
        if !is_placeable(lat, lng) {
            continue;
        }
        match out.as_mut() {
            Some(b) => b.extend(lat, lng),
            None => {
                out = Some(Bounds {
                    min_lat: lat,
                    min_lng: lng,
                    max_lat: lat,
                    max_lng: lng,
                })
            }
        }
    }
    out
}

/// Center of the placed events, or [`DEFAULT_CENTER`]
pub fn map_center<'a, I>(events: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a Event>,
{
    bounds(events).map_or(DEFAULT_CENTER, |b| b.center())
}

fn marker_properties(e: &Event) -> JsonObject {
    let mut props = JsonObject::new();
    props.insert("id".into(), JsonValue::from(e.id.as_str()));
    props.insert("headline".into(), JsonValue::from(e.headline.as_str()));
    props.insert("timestamp".into(), JsonValue::from(e.timestamp.as_str()));
    props.insert("category".into(), JsonValue::from(e.category.as_str()));
    props.insert("intensity".into(), JsonValue::from(e.intensity));
    props.insert("killed".into(), JsonValue::from(e.casualties.killed));
    props.insert("injured".into(), JsonValue::from(e.casualties.injured));
    props.insert(
        "buildings_destroyed".into(),
        JsonValue::from(e.infrastructure_damage.buildings_destroyed),
    );
    props
}

/// Point features for the map view. GeoJSON positions are `[lng, lat]`.
pub fn to_feature_collection<'a, I>(events: I) -> FeatureCollection
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut features = Vec::new();
    for e in events {
        let (lat, lng) = (e.location.lat, e.location.lng);
        if !is_placeable(lat, lng) {
            tracing::warn!(id = %e.id, lat, lng, "event has no usable coordinates, skipping marker");
            continue;
        }
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![lng, lat]))),
            id: Some(geojson::feature::Id::String(e.id.clone())),
            properties: Some(marker_properties(e)),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn to_geojson_string<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    GeoJson::FeatureCollection(to_feature_collection(events)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::event;

    fn placed(id: &str, lat: f64, lng: f64) -> Event {
        let mut e = event(id);
        e.location.lat = lat;
        e.location.lng = lng;
        e
    }

    #[test]
    fn placeable_range() {
        assert!(is_placeable(31.5, 34.4));
        assert!(!is_placeable(91.0, 0.0));
        assert!(!is_placeable(0.0, -180.5));
        assert!(!is_placeable(f64::NAN, 0.0));
    }

    #[test]
    fn bounds_and_center_skip_bad_points() {
        let events = vec![
            placed("a", 31.2, 34.2),
            placed("b", f64::INFINITY, 0.0),
            placed("c", 31.6, 34.6),
        ];
        let b = bounds(&events).unwrap();
        assert_eq!(b.min_lat, 31.2);
        assert_eq!(b.max_lng, 34.6);
        let (lat, lng) = map_center(&events);
        assert!((lat - 31.4).abs() < 1e-9);
        assert!((lng - 34.4).abs() < 1e-9);
    }

    #[test]
    fn empty_center_falls_back() {
        assert_eq!(map_center(&Vec::<Event>::new()), DEFAULT_CENTER);
    }

    #[test]
    fn features_are_lng_lat_points() {
        let mut e = placed("e1", 31.5, 34.45);
        e.casualties.killed = 4;
        let events = vec![e, placed("bad", 200.0, 0.0)];
        let fc = to_feature_collection(&events);
        assert_eq!(fc.features.len(), 1);

        let feature = &fc.features[0];
        match &feature.geometry.as_ref().unwrap().value {
            Value::Point(pos) => assert_eq!(pos.as_slice(), &[34.45, 31.5]),
            other => panic!("unexpected geometry {other:?}"),
        }
        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props.get("killed"), Some(&JsonValue::from(4u32)));
        assert!(to_geojson_string(&events).contains("FeatureCollection"));
    }
}
