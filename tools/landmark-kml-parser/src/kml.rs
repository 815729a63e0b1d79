use anyhow::{Context, Result};
use roxmltree::{Document, Node};

#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Reads every `Placemark` with a `Point`, in document order. Placemarks
/// without a name or a usable point are skipped with a warning.
pub fn parse_placemarks(xml: &str) -> Result<Vec<Placemark>> {
    let doc = Document::parse(xml).context("Failed to parse KML")?;

    let mut placemarks = Vec::new();
    for placemark in doc.descendants().filter(|n| n.has_tag_name("Placemark")) {
        let Some(name) = child_text(placemark, "name") else {
            log::warn!("Skipping placemark without a name");
            continue;
        };

        let coordinates = placemark
            .children()
            .find(|n| n.has_tag_name("Point"))
            .and_then(|point| child_text(point, "coordinates"));

        let Some((longitude, latitude)) = coordinates.as_deref().and_then(parse_coordinates)
        else {
            log::warn!("Skipping placemark '{name}': no point coordinates");
            continue;
        };

        placemarks.push(Placemark {
            description: child_text(placemark, "description"),
            name,
            latitude,
            longitude,
        });
    }

    Ok(placemarks)
}

fn child_text(node: Node, tag: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// KML coordinates are `lon,lat[,alt]`.
pub fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    let mut split = text.trim().split(',');
    let longitude = split.next()?.trim().parse().ok()?;
    let latitude = split.next()?.trim().parse().ok()?;
    Some((longitude, latitude))
}

/// "Golden Gate Bridge" -> "golden_gate_bridge"
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_end_matches('_').to_owned()
}
