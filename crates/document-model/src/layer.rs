//! Layer entries (`layers[]`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Layer type code of an image layer.
pub const IMAGE_LAYER_TYPE: u32 = 2;

/// One entry of the document's `layers` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    /// Layer type (`2` = image).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<u32>,

    /// Asset referenced by image and precomp layers.
    #[serde(
        rename = "refId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ref_id: Option<String>,

    /// Transform properties. Only the anchor (`a`) is ever rewritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ks: Option<Map<String, Value>>,

    /// All other fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayerEntry {
    /// Create an image layer with a static anchor.
    pub fn image(ref_id: impl Into<String>, anchor: [f64; 3]) -> Self {
        let mut a = Map::new();
        a.insert("a".to_string(), Value::from(0));
        a.insert("k".to_string(), Value::from(anchor.to_vec()));
        let mut ks = Map::new();
        ks.insert("a".to_string(), Value::Object(a));
        Self {
            ty: Some(IMAGE_LAYER_TYPE),
            ref_id: Some(ref_id.into()),
            ks: Some(ks),
            extra: Map::new(),
        }
    }

    pub fn is_image_layer(&self) -> bool {
        self.ty == Some(IMAGE_LAYER_TYPE)
    }

    /// The anchor-point property (`ks.a`), when it is defined as an object.
    pub fn anchor_property(&self) -> Option<&Map<String, Value>> {
        self.ks.as_ref()?.get("a")?.as_object()
    }

    pub fn anchor_property_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.ks.as_mut()?.get_mut("a")?.as_object_mut()
    }

    /// Current anchor value (`ks.a.k`).
    pub fn anchor_value(&self) -> Option<&Value> {
        self.anchor_property()?.get("k")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_id_uses_lottie_field_name() {
        let layer = LayerEntry::image("image_0", [0.0, 0.0, 0.0]);
        let value = serde_json::to_value(&layer).unwrap();
        assert_eq!(value["refId"], Value::from("image_0"));
        assert_eq!(value["ty"], Value::from(2));
    }

    #[test]
    fn test_anchor_accessors() {
        let json = r#"{"ty":2,"refId":"a1","ks":{"a":{"a":0,"k":[5,6,0]},"o":{"a":0,"k":100}}}"#;
        let layer: LayerEntry = serde_json::from_str(json).unwrap();
        assert!(layer.is_image_layer());
        assert_eq!(
            layer.anchor_value(),
            Some(&serde_json::json!([5, 6, 0]))
        );
    }

    #[test]
    fn test_missing_anchor_is_none() {
        let json = r#"{"ty":2,"refId":"a1","ks":{"o":{"a":0,"k":100}}}"#;
        let mut layer: LayerEntry = serde_json::from_str(json).unwrap();
        assert!(layer.anchor_property().is_none());
        assert!(layer.anchor_property_mut().is_none());
    }
}
