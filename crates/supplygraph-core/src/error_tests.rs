//! Tests for error display formatting.

use crate::error::Error;

#[test]
fn test_entity_error_messages() {
    assert_eq!(
        Error::EntityExists("farm".to_string()).to_string(),
        "entity 'farm' already exists"
    );
    assert_eq!(
        Error::EntityNotFound("farm".to_string()).to_string(),
        "entity 'farm' not found"
    );
}

#[test]
fn test_flow_error_messages() {
    assert_eq!(
        Error::FlowEndpointsMissing {
            from: "farm".to_string(),
            to: "mill".to_string(),
        }
        .to_string(),
        "cannot add flow from 'farm' to 'mill': both entities must exist"
    );
    assert_eq!(
        Error::SourceNotFound("farm".to_string()).to_string(),
        "source entity 'farm' not found"
    );
    assert_eq!(
        Error::FlowNotFound {
            from: "farm".to_string(),
            to: "mill".to_string(),
        }
        .to_string(),
        "no flow exists from 'farm' to 'mill'"
    );
}

#[test]
fn test_path_error_messages() {
    assert_eq!(
        Error::PathEndpointsMissing {
            start: "farm".to_string(),
            end: "mill".to_string(),
        }
        .to_string(),
        "invalid path endpoints: 'farm' and 'mill' must both exist"
    );
    assert_eq!(
        Error::PathNotFound {
            start: "farm".to_string(),
            end: "mill".to_string(),
        }
        .to_string(),
        "no path found from 'farm' to 'mill'"
    );
}
