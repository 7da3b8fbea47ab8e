/// Value substituted for element attributes the model leaves unset.
pub const UNKNOWN: &str = "Unknown";

/// One IfcProduct instance as read from the model.
///
/// `name` and `object_type` are kept optional; callers resolve them through
/// [`ModelElement::name_or_unknown`] and [`ModelElement::sub_type`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelElement {
    pub id: u64,
    pub global_id: Option<String>,
    pub type_code: String,
    pub name: Option<String>,
    pub object_type: Option<String>,
}

impl ModelElement {
    #[must_use]
    pub fn new(id: u64, type_code: impl Into<String>) -> Self {
        Self {
            id,
            global_id: None,
            type_code: type_code.into(),
            name: None,
            object_type: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    #[must_use]
    pub fn name_or_unknown(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    /// `#<id> <GlobalId>` identification used in logs.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.global_id {
            Some(global_id) => format!("#{} {global_id}", self.id),
            None => format!("#{}", self.id),
        }
    }

    /// The element's IFC `ObjectType`, or [`UNKNOWN`].
    #[must_use]
    pub fn sub_type(&self) -> &str {
        self.object_type.as_deref().unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attributes_resolve_to_unknown() {
        let element = ModelElement::new(1, "IfcWall");
        assert_eq!(element.name_or_unknown(), "Unknown");
        assert_eq!(element.sub_type(), "Unknown");

        let element = element.with_name("W-01").with_object_type("Basic Wall");
        assert_eq!(element.name_or_unknown(), "W-01");
        assert_eq!(element.sub_type(), "Basic Wall");
    }

    #[test]
    fn label_carries_step_id_and_global_id() {
        let mut element = ModelElement::new(42, "IfcDoor");
        assert_eq!(element.label(), "#42");

        element.global_id = Some("3vB2YO$MX4xv5uCqZZG05x".to_string());
        assert_eq!(element.label(), "#42 3vB2YO$MX4xv5uCqZZG05x");
    }
}
