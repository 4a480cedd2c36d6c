//! Anchor point recentering for image layers.
//!
//! After embedding, image layers render around a corner of the asset. Moving
//! the anchor to `[-w/2, -h/2, 0]` restores the pre-embed placement.

use std::collections::HashMap;

use lottie_embed_document::LottieDocument;
use serde_json::{Number, Value};

/// Recenter the anchor of every image layer that references a sized asset.
///
/// Layers of another type, without a matching asset, or without an anchor
/// property are left unchanged. Returns the number of layers rewritten.
pub fn center_anchor_points(document: &mut LottieDocument) -> usize {
    let dimensions: HashMap<String, (f64, f64)> = document
        .assets()
        .iter()
        .filter_map(|asset| asset.dimensions().map(|dims| (asset.id.clone(), dims)))
        .collect();

    let mut centered = 0;
    for layer in document.layers_mut() {
        if !layer.is_image_layer() {
            continue;
        }
        let Some(&(w, h)) = layer.ref_id.as_ref().and_then(|id| dimensions.get(id)) else {
            continue;
        };
        let Some(anchor) = layer.anchor_property_mut() else {
            continue;
        };

        anchor.insert(
            "k".to_string(),
            Value::Array(vec![json_number(w / -2.0), json_number(h / -2.0), Value::from(0)]),
        );
        // A keyframed anchor becomes static once `k` holds a plain vector.
        if anchor.get("a").and_then(Value::as_u64) == Some(1) {
            anchor.insert("a".to_string(), Value::from(0));
        }
        centered += 1;
    }

    tracing::debug!(layers = centered, "Centered anchor points");
    centered
}

/// Whole values serialize as integers, matching what exporters write.
fn json_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
    }
}
