//! API registry
//!
//! Human-readable descriptions of every public endpoint, collected once at
//! startup. Nothing here takes part in request handling; the registry is only
//! rendered for documentation tooling.

use serde::Serialize;
use serde_json::Value;

/// A documented route parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl ApiParameter {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// What a call returns: a JSON sample or a content label such as `Image/PNG`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExampleResponse {
    Json(Value),
    Content(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiCall {
    pub path: String,
    pub description: String,
    pub parameters: Vec<ApiParameter>,
    pub example: ExampleResponse,
}

// == API Registry ==
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ApiRegistry {
    calls: Vec<ApiCall>,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one endpoint. Registering the same path again replaces it.
    pub fn register_call(
        &mut self,
        path: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ApiParameter>,
        example: ExampleResponse,
    ) {
        let call = ApiCall {
            path: path.into(),
            description: description.into(),
            parameters,
            example,
        };
        match self.calls.iter_mut().find(|existing| existing.path == call.path) {
            Some(existing) => *existing = call,
            None => self.calls.push(call),
        }
    }

    pub fn calls(&self) -> &[ApiCall] {
        &self.calls
    }

    pub fn find(&self, path: &str) -> Option<&ApiCall> {
        self.calls.iter().find(|call| call.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_serialize() {
        let mut registry = ApiRegistry::new();
        registry.register_call(
            "/api/item/:itemId/icon",
            "Gets the inventory icon of an item",
            vec![ApiParameter::new(":itemId", "number", "The ID of the item")],
            ExampleResponse::Content("Image/PNG".to_string()),
        );

        assert_eq!(registry.calls().len(), 1);
        assert_eq!(
            serde_json::to_value(&registry).unwrap(),
            json!([{
                "path": "/api/item/:itemId/icon",
                "description": "Gets the inventory icon of an item",
                "parameters": [
                    { "name": ":itemId", "type": "number", "description": "The ID of the item" }
                ],
                "example": "Image/PNG"
            }])
        );
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut registry = ApiRegistry::new();
        registry.register_call("/a", "first", vec![], ExampleResponse::Json(json!({})));
        registry.register_call("/a", "second", vec![], ExampleResponse::Json(json!([])));

        assert_eq!(registry.calls().len(), 1);
        assert_eq!(registry.find("/a").unwrap().description, "second");
        assert!(registry.find("/b").is_none());
    }
}
