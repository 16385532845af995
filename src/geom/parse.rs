use crate::error::GlobeError;
use geo_types::Geometry;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GlobeError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into geometries.
///
/// A bare geometry or a single feature yields one entry; a feature collection yields
/// one entry per feature that carries a geometry.
pub fn parse_geojson_all(s: &str) -> Result<Vec<Geometry<f64>>, GlobeError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| GlobeError::GeometryParseError(e.to_string()))?;

    let to_geo = |g: geojson::Geometry| {
        Geometry::try_from(g).map_err(|e| GlobeError::GeometryParseError(e.to_string()))
    };

    match geojson {
        GeoJson::Geometry(geom) => Ok(vec![to_geo(geom)?]),
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| GlobeError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(to_geo)
            .map(|g| vec![g]),
        GeoJson::FeatureCollection(fc) => fc
            .features
            .into_iter()
            .filter_map(|f| f.geometry)
            .map(to_geo)
            .collect(),
    }
}

/// Parses a GeoJSON string holding exactly one geometry or feature.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, GlobeError> {
    let mut geoms = parse_geojson_all(s)?;
    if geoms.len() != 1 {
        return Err(GlobeError::GeometryParseError(format!(
            "expected a single geometry, found {}",
            geoms.len()
        )));
    }
    Ok(geoms.remove(0))
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, GlobeError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| GlobeError::GeometryParseError(e.to_string()))?;

    wkt.try_into()
        .map_err(|_| GlobeError::GeometryParseError("Failed to convert WKT to geometry".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_polygon() -> Result<(), GlobeError> {
        let json = r#"{"type":"Polygon","coordinates":[[[-10,-5],[10,-5],[10,5],[-10,5],[-10,-5]]]}"#;
        match parse_geometry(json)? {
            Geometry::Polygon(poly) => assert_eq!(poly.exterior().0.len(), 5),
            _ => panic!("Expected Polygon"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_collection() -> Result<(), GlobeError> {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[1,2]}},
            {"type":"Feature","properties":{},"geometry":null},
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[3,4]}}
        ]}"#;
        let geoms = parse_geojson_all(json)?;
        assert_eq!(geoms.len(), 2);

        assert!(parse_geojson(json).is_err());
        Ok(())
    }

    #[test]
    fn test_parse_feature_without_geometry() {
        let json = r#"{"type":"Feature","properties":{},"geometry":null}"#;
        assert!(matches!(
            parse_geometry(json),
            Err(GlobeError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_parse_wkt_linestring() -> Result<(), GlobeError> {
        match parse_geometry("LINESTRING(-0.1 51.5, -0.2 51.6)")? {
            Geometry::LineString(line) => assert_eq!(line.0.len(), 2),
            _ => panic!("Expected LineString"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_invalid() {
        assert!(parse_geometry("POLYGON((oops").is_err());
    }
}
