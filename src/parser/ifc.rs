use crate::error::ParseError;
use crate::model::ModelElement;
use crate::parser::step::{StepEntity, StepFile};
use std::collections::BTreeSet;
use std::path::Path;

// Attribute positions shared by every IfcObject subtype
const NAME_INDEX: usize = 2;
const OBJECT_TYPE_INDEX: usize = 4;

/// An opened IFC model.
///
/// Exposes the entity lookups the matching pipeline needs: the entity types
/// present and the elements of one exact type.
#[derive(Debug)]
pub struct IfcModel {
    pub schema: String,
    pub file_path: String,
    step: StepFile,
}

impl IfcModel {
    /// Opens and parses an IFC file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::FileRead`] if the file cannot be read.
    /// Returns [`ParseError::InvalidStep`] if the STEP format is malformed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ifc_supplier_match::parser::IfcModel;
    ///
    /// let model = IfcModel::open("model.ifc")?;
    /// for keyword in model.entity_types() {
    ///     println!("{keyword}: {}", model.elements_by_type(&keyword).len());
    /// }
    /// # Ok::<(), ifc_supplier_match::error::ParseError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let content = std::fs::read_to_string(&path).map_err(|source| ParseError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        let mut model = Self::parse(&content)?;
        model.file_path = path.as_ref().to_string_lossy().to_string();

        log::info!(
            "opened {} ({} schema, {} entities)",
            model.file_path,
            model.schema,
            model.step.entities.len()
        );

        Ok(model)
    }

    /// Parses IFC content already held in memory.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let step = StepFile::parse(content)?;
        Ok(Self {
            schema: step.schema.clone(),
            file_path: String::new(),
            step,
        })
    }

    /// Distinct entity keywords in the DATA section, upper case (`IFCWALL`).
    ///
    /// No schema filtering happens here; the classification mapping decides
    /// which of these types are products of interest.
    #[must_use]
    pub fn entity_types(&self) -> BTreeSet<String> {
        self.step
            .entities
            .values()
            .map(|e| e.entity_type.clone())
            .collect()
    }

    /// Elements whose entity type is exactly `type_code`, in file order.
    ///
    /// The keyword comparison ignores ASCII case and each element carries
    /// `type_code` as spelled by the caller. Subtypes are not included:
    /// `IfcWall` does not return `IfcWallStandardCase`.
    #[must_use]
    pub fn elements_by_type(&self, type_code: &str) -> Vec<ModelElement> {
        self.step
            .entities_of_type(type_code)
            .map(|entity| to_element(entity, type_code))
            .collect()
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.step.entities.len()
    }
}

fn to_element(entity: &StepEntity, type_code: &str) -> ModelElement {
    ModelElement {
        id: entity.id,
        global_id: entity.string_attribute(0).map(str::to_string),
        type_code: type_code.to_string(),
        name: entity.string_attribute(NAME_INDEX).map(str::to_string),
        object_type: entity
            .string_attribute(OBJECT_TYPE_INDEX)
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MODEL: &str = "ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#10=IFCPROJECT('0001',$,'Demo',$,$,$,$,$,$);
#21=IFCWALLSTANDARDCASE('w1',$,'Basic Wall:Exterior:101',$,'Basic Wall:Exterior',$,$,$);
#22=IFCWALL('w2',$,$,$,$,$,$,$);
#23=IFCWALLSTANDARDCASE('w3',$,'Basic Wall:Exterior:102',$,'Basic Wall:Exterior',$,$,$);
#30=IFCDOOR('d1',$,'Door:Single',$,'Single-Flush',$,$,$,2100.,900.);
#40=IFCPROPERTYSET('p1',$,'Pset_WallCommon',$,());
ENDSEC;
END-ISO-10303-21;
";

    #[test]
    fn entity_types_lists_every_keyword() {
        let model = IfcModel::parse(MODEL).unwrap();
        let types: Vec<_> = model.entity_types().into_iter().collect();
        assert_eq!(
            types,
            vec![
                "IFCDOOR",
                "IFCPROJECT",
                "IFCPROPERTYSET",
                "IFCWALL",
                "IFCWALLSTANDARDCASE"
            ]
        );
        assert_eq!(model.schema, "IFC2X3");
    }

    #[test]
    fn types_outside_the_core_schema_are_kept() {
        let content = "ISO-10303-21;
DATA;
#1=IFCELECTRICALELEMENT('e1',$,'Panel',$,'Distribution Board',$,$,$);
#2=IFCSTRUCTURALCURVEMEMBER('s1',$,'Member',$,$,$,$,.RIGID_JOINED_MEMBER.);
#3=IFCPAVEMENT('p1',$,'Asphalt',$,'Wearing Course',$,$,$,$);
#4=IFCEQUIPMENTELEMENT('q1',$,'Pump',$,$,$,$,$);
ENDSEC;
";
        let model = IfcModel::parse(content).unwrap();
        let types: Vec<_> = model.entity_types().into_iter().collect();
        assert_eq!(
            types,
            vec![
                "IFCELECTRICALELEMENT",
                "IFCEQUIPMENTELEMENT",
                "IFCPAVEMENT",
                "IFCSTRUCTURALCURVEMEMBER"
            ]
        );

        let pavements = model.elements_by_type("IfcPavement");
        assert_eq!(pavements.len(), 1);
        assert_eq!(pavements[0].type_code, "IfcPavement");
        assert_eq!(pavements[0].object_type.as_deref(), Some("Wearing Course"));
    }

    #[test]
    fn elements_by_type_reads_name_and_object_type() {
        let model = IfcModel::parse(MODEL).unwrap();
        let walls = model.elements_by_type("IfcWallStandardCase");
        assert_eq!(walls.len(), 2);
        assert_eq!(walls[0].id, 21);
        assert_eq!(walls[0].name.as_deref(), Some("Basic Wall:Exterior:101"));
        assert_eq!(walls[0].object_type.as_deref(), Some("Basic Wall:Exterior"));
        assert_eq!(walls[1].global_id.as_deref(), Some("w3"));
    }

    #[test]
    fn elements_by_type_is_exact() {
        let model = IfcModel::parse(MODEL).unwrap();
        let walls = model.elements_by_type("IfcWall");
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].name, None);
        assert_eq!(walls[0].object_type, None);
        assert!(model.elements_by_type("IfcSlab").is_empty());
    }

    #[test]
    fn open_reports_missing_file() {
        let err = IfcModel::open("/nonexistent/model.ifc").unwrap_err();
        assert!(matches!(err, ParseError::FileRead { .. }));
    }
}
