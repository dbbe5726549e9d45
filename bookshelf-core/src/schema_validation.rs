use serde_json::{json, Value};

/// JSON Schema of the on-disk book collection
pub fn store_document_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Book collection",
        "type": "object",
        "properties": {
            "books": {
                "type": "object",
                "additionalProperties": { "$ref": "#/definitions/book" }
            }
        },
        "required": ["books"],
        "definitions": {
            "book": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "authors": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "publicationYear": { "type": ["integer", "null"] },
                    "rating": { "type": "number", "minimum": 0 },
                    "ISBN": { "type": "string" }
                },
                "required": ["name", "authors", "rating"]
            }
        }
    })
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with every violation and its location if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_collection_passes() {
        let data = json!({
            "books": {
                "b1": {
                    "name": "Dune",
                    "authors": ["Frank Herbert"],
                    "publicationYear": 1965,
                    "rating": 9,
                    "ISBN": ""
                },
                "b2": {
                    "name": "Draft",
                    "authors": ["Anon"],
                    "publicationYear": null,
                    "rating": 0
                }
            }
        });

        assert!(validate_against_schema(&store_document_schema(), &data).is_ok());
    }

    #[test]
    fn test_missing_books_key_fails() {
        let result = validate_against_schema(&store_document_schema(), &json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_every_violation_is_reported_with_location() {
        let data = json!({
            "books": {
                "b1": { "name": 12, "authors": ["A"], "rating": 1 },
                "b2": { "name": "Ok", "authors": "A", "rating": -2 }
            }
        });

        let errors = validate_against_schema(&store_document_schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("/books/b1/name")));
        assert!(errors.iter().any(|e| e.contains("/books/b2/rating")));
    }

    #[test]
    fn test_year_must_be_integer() {
        let data = json!({
            "books": {
                "b1": { "name": "X", "authors": ["A"], "rating": 1, "publicationYear": "1999" }
            }
        });

        assert!(validate_against_schema(&store_document_schema(), &data).is_err());
    }
}
