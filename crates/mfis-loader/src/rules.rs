//! Rule files: `Name, Risk=Label, Var=Label, Var=Label, ...`.

use std::path::Path;

use mfis_core::errors::{LoadError, MfisResult};
use mfis_core::{InferenceError, Rule, RuleList, SetKey};
use mfis_observability::load_span;

use crate::lines::{self, Source};

/// Parse a rule file. The consequent comes first, then the antecedents.
pub fn parse_rules(content: &str, source: &str) -> Result<RuleList, LoadError> {
    let src = Source { name: source };
    let mut rules = RuleList::default();

    for (line, fields) in lines::records(content) {
        let key = |text: &str| -> Result<SetKey, LoadError> {
            text.parse()
                .map_err(|e: InferenceError| src.error(line, e.to_string()))
        };
        let (name, consequent, antecedents) = match fields.as_slice() {
            [name, consequent, antecedents @ ..] if !name.is_empty() => {
                (*name, key(*consequent)?, antecedents)
            }
            _ => return Err(src.error(line, "expected Name, Risk=Label, Var=Label, ...")),
        };
        let antecedents = antecedents
            .iter()
            .map(|a| key(*a))
            .collect::<Result<Vec<_>, _>>()?;
        let rule =
            Rule::new(name, antecedents, consequent).map_err(|e| src.error(line, e.to_string()))?;
        rules.push(rule);
    }
    Ok(rules)
}

/// Read and parse a rule file.
pub fn load_rules(path: impl AsRef<Path>) -> MfisResult<RuleList> {
    let path = path.as_ref();
    let _span = load_span!(path.display()).entered();
    let content = lines::read(path)?;
    Ok(parse_rules(&content, &path.display().to_string())?)
}
