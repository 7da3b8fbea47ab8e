use std::collections::BTreeMap;

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum StepValue {
    String(String),
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Enum(String),
    Reference(u64),
    List(Vec<StepValue>),
    Null,
    Derived,
}

impl StepValue {
    /// Returns the text of a string value, `None` for anything else.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StepValue::String(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepEntity {
    pub id: u64,
    /// Entity keyword as written in the file, upper case (e.g. `IFCWALL`).
    pub entity_type: String,
    pub values: Vec<StepValue>,
}

impl StepEntity {
    /// String attribute at `index`; `$`, `*` and non-string values read as `None`.
    #[must_use]
    pub fn string_attribute(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(StepValue::as_str)
    }
}

/// A parsed ISO-10303-21 exchange file.
///
/// Entities are keyed by instance id, so iteration follows file numbering.
#[derive(Debug, Default)]
pub struct StepFile {
    pub entities: BTreeMap<u64, StepEntity>,
    pub schema: String,
}

impl StepFile {
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let content = content.trim_start_matches('\u{feff}');
        if !content.trim_start().starts_with("ISO-10303-21") {
            return Err(ParseError::InvalidStep {
                message: "missing ISO-10303-21 header".to_string(),
            });
        }

        let mut file = StepFile::default();
        let mut in_data = false;
        let mut saw_data = false;

        for statement in split_statements(content) {
            let statement = statement.trim();

            if statement.starts_with("FILE_SCHEMA") {
                if let Some(schema) = first_quoted(statement) {
                    file.schema = schema.to_string();
                }
                continue;
            }

            match statement {
                "DATA" => {
                    in_data = true;
                    saw_data = true;
                    continue;
                }
                "ENDSEC" => {
                    in_data = false;
                    continue;
                }
                _ => {}
            }

            if in_data && statement.starts_with('#') {
                match Self::parse_entity(statement) {
                    Some(entity) => {
                        file.entities.insert(entity.id, entity);
                    }
                    None => log::debug!("skipping unsupported STEP instance: {statement}"),
                }
            }
        }

        if !saw_data {
            return Err(ParseError::InvalidStep {
                message: "no DATA section found".to_string(),
            });
        }

        Ok(file)
    }

    fn parse_entity(statement: &str) -> Option<StepEntity> {
        // Format: #123=IFCWALL('guid',#ref,'name',...)
        let eq_pos = statement.find('=')?;
        let id: u64 = statement[1..eq_pos].trim().parse().ok()?;

        let rest = statement[eq_pos + 1..].trim();
        let paren_pos = rest.find('(')?;
        // Complex instances `#1=(IFCA() IFCB())` have no leading keyword.
        if paren_pos == 0 || !rest.ends_with(')') {
            return None;
        }
        let entity_type = rest[..paren_pos].trim().to_ascii_uppercase();

        let values = parse_values(&rest[paren_pos + 1..rest.len() - 1]);

        Some(StepEntity {
            id,
            entity_type,
            values,
        })
    }

    /// Entities whose keyword equals `entity_type`, ignoring ASCII case, in id order.
    pub fn entities_of_type<'a>(
        &'a self,
        entity_type: &'a str,
    ) -> impl Iterator<Item = &'a StepEntity> + 'a {
        self.entities
            .values()
            .filter(move |e| e.entity_type.eq_ignore_ascii_case(entity_type))
    }
}

/// Splits the file into `;`-terminated statements.
///
/// Line breaks carry no meaning in STEP and are dropped; comments are removed.
fn split_statements(content: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' | '\n' => {}
            '\'' => {
                in_string = !in_string;
                current.push(ch);
            }
            '/' if !in_string && chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            ';' if !in_string => {
                statements.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if !current.trim().is_empty() {
        statements.push(current);
    }

    statements
}

fn first_quoted(s: &str) -> Option<&str> {
    let start = s.find('\'')? + 1;
    let end = s[start..].find('\'')?;
    Some(&s[start..start + end])
}

fn parse_values(s: &str) -> Vec<StepValue> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut depth = 0usize;

    for ch in s.chars() {
        match ch {
            '\'' => {
                in_string = !in_string;
                current.push(ch);
            }
            '(' if !in_string => {
                depth += 1;
                current.push(ch);
            }
            ')' if !in_string => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if !in_string && depth == 0 => {
                values.push(parse_single_value(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !current.trim().is_empty() {
        values.push(parse_single_value(&current));
    }

    values
}

fn parse_single_value(s: &str) -> StepValue {
    let s = s.trim();

    match s {
        "$" => return StepValue::Null,
        "*" => return StepValue::Derived,
        _ => {}
    }
    if let Some(id) = s.strip_prefix('#').and_then(|r| r.parse::<u64>().ok()) {
        return StepValue::Reference(id);
    }
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        return StepValue::String(decode_step_string(&s[1..s.len() - 1]));
    }
    if s.len() >= 2 && s.starts_with('.') && s.ends_with('.') {
        return match &s[1..s.len() - 1] {
            "T" => StepValue::Boolean(true),
            "F" => StepValue::Boolean(false),
            inner => StepValue::Enum(inner.to_string()),
        };
    }
    if s.starts_with('(') && s.ends_with(')') {
        return StepValue::List(parse_values(&s[1..s.len() - 1]));
    }
    if let Ok(i) = s.parse::<i64>() {
        return StepValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return StepValue::Real(f);
    }
    // Typed value like IFCLABEL('x') or IFCBOOLEAN(.T.)
    if let Some(paren_pos) = s.find('(') {
        if s.ends_with(')') {
            return parse_single_value(&s[paren_pos + 1..s.len() - 1]);
        }
    }

    StepValue::String(s.to_string())
}

/// Decodes STEP string escapes: `''`, `\\`, `\S\c`, `\X\hh` and `\X2\hhhh...\X0\`.
fn decode_step_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                }
                out.push('\'');
            }
            '\\' => match chars.peek().copied() {
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some('S') => {
                    chars.next();
                    if chars.next_if_eq(&'\\').is_some() {
                        if let Some(c) = chars.next() {
                            let shifted = u32::from(c) + 0x80;
                            out.extend(char::from_u32(shifted));
                        }
                    } else {
                        out.push_str("\\S");
                    }
                }
                Some('X') => {
                    chars.next();
                    decode_x_escape(&mut chars, &mut out);
                }
                _ => out.push('\\'),
            },
            _ => out.push(ch),
        }
    }

    out
}

fn decode_x_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    match chars.peek().copied() {
        // \X\hh - one ISO 8859-1 byte
        Some('\\') => {
            chars.next();
            let hex: String = chars.by_ref().take(2).collect();
            match u8::from_str_radix(&hex, 16) {
                Ok(byte) => out.push(char::from(byte)),
                Err(_) => {
                    out.push_str("\\X\\");
                    out.push_str(&hex);
                }
            }
        }
        // \X2\hhhh...\X0\ - UTF-16 code units
        Some('2') => {
            chars.next();
            chars.next_if_eq(&'\\');
            let mut hex = String::new();
            while let Some(c) = chars.next_if(|c| *c != '\\') {
                hex.push(c);
            }
            // terminator \X0\
            for expected in ['\\', 'X', '0', '\\'] {
                chars.next_if_eq(&expected);
            }
            let units: Vec<u16> = hex
                .as_bytes()
                .chunks(4)
                .filter_map(|chunk| std::str::from_utf8(chunk).ok())
                .filter_map(|unit| u16::from_str_radix(unit, 16).ok())
                .collect();
            out.extend(char::decode_utf16(units).filter_map(Result::ok));
        }
        _ => out.push_str("\\X"),
    }
}
