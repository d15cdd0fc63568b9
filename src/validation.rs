//! Validation pipeline
//!
//! Composes the parser, codec, resolver and validators into one run:
//! parse → classify → resolve → check format → report. Problems with
//! individual tokens become findings; only I/O and decoding problems are errors.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::config::TokensConfig;
use crate::css::parser::{build_property_map, parse_css_properties, ParsedProperty, PropertyMap};
use crate::css::validators::FormatKind;
use crate::css::var_resolver::{resolve_with_reason, UnresolvedReason, VariableResolutionStatus};
use crate::error::{IoContext, TokensResult};
use crate::report::{Finding, FindingCategory, ValidationReport};
use crate::tokens::definitions::{load_token_dir, TokenDefinition};
use crate::tokens::name::{token_name_from_css_var, TokenLevel};
use crate::tokens::themable::{check_themable, ThemableRules};

/// Validate every custom property declared in a stylesheet.
pub fn validate_css(text: &str, file: &Path, report: &mut ValidationReport) {
    let properties = parse_css_properties(text);
    let property_map = build_property_map(&properties);
    let mut first_lines: HashMap<&str, usize> = HashMap::new();

    for property in &properties {
        let mut findings = Vec::new();

        if let Some(first_line) = first_lines.get(property.name.as_str()) {
            findings.push(
                Finding::warning(
                    FindingCategory::Duplicate,
                    property.name.clone(),
                    format!("declared again (first declared on line {}); the last declaration wins", first_line),
                )
                .in_file(file)
                .at_line(property.line),
            );
        } else {
            first_lines.insert(&property.name, property.line);
        }

        findings.extend(check_property(property, &property_map, file));
        report.record(findings);
    }

    log::info!("Validated {} custom properties from {}", properties.len(), file.display());
}

fn check_property(property: &ParsedProperty, property_map: &PropertyMap, file: &Path) -> Vec<Finding> {
    let mut findings = Vec::new();
    let level = TokenLevel::from_css_var_name(&property.name);

    if level == TokenLevel::Unknown {
        findings.push(
            Finding::warning(
                FindingCategory::Naming,
                property.name.clone(),
                "name does not follow the --lufa-<level>- convention",
            )
            .with_expected("--lufa-{primitive|core|semantic|component}-...")
            .with_actual(property.name.clone())
            .in_file(file)
            .at_line(property.line),
        );
    }

    match resolve_with_reason(&property.value, property_map) {
        VariableResolutionStatus::Resolved(value) => {
            if level == TokenLevel::Unknown {
                return findings;
            }
            let token_name = token_name_from_css_var(&property.name);
            if let Some(kind) = FormatKind::for_token_name(&token_name) {
                if !kind.validate(&value) {
                    findings.push(
                        Finding::error(FindingCategory::Format, token_name, format!("value is not a valid {}", kind.describe()))
                            .with_expected(kind.describe())
                            .with_actual(value)
                            .in_file(file)
                            .at_line(property.line),
                    );
                }
            }
        }
        VariableResolutionStatus::Unresolved(reason) => {
            let message = match &reason {
                UnresolvedReason::Undefined(name) => format!("references undefined property {}", name),
                UnresolvedReason::Circular => "circular var() reference".to_string(),
            };
            log::debug!("{} on line {}: {}", property.name, property.line, message);
            findings.push(
                Finding::error(FindingCategory::Reference, display_name(&property.name), message)
                    .with_actual(property.value.clone())
                    .in_file(file)
                    .at_line(property.line),
            );
        }
    }

    findings
}

/// Dotted name for design system properties, the raw name otherwise
fn display_name(css_var_name: &str) -> String {
    match TokenLevel::from_css_var_name(css_var_name) {
        TokenLevel::Unknown => css_var_name.to_string(),
        _ => token_name_from_css_var(css_var_name),
    }
}

/// Validate JSON token definitions: the themable attribute of each token and
/// the target of each `{alias}`.
pub fn validate_token_definitions(definitions: &[TokenDefinition], rules: &ThemableRules, report: &mut ValidationReport) {
    let known: HashSet<&str> = definitions.iter().map(|definition| definition.path.as_str()).collect();

    for definition in definitions {
        let mut findings: Vec<Finding> = check_themable(definition, rules).into_iter().collect();

        if let Some(target) = definition.alias_target() {
            if !known.contains(target) {
                findings.push(
                    Finding::error(
                        FindingCategory::Reference,
                        definition.path.clone(),
                        format!("alias points to undefined token {}", target),
                    )
                    .with_actual(target)
                    .in_file(&definition.file),
                );
            }
        }

        report.record(findings);
    }

    log::info!("Validated {} token definitions", definitions.len());
}

/// Run every configured check and return the combined report.
pub async fn validate_project(config: &TokensConfig) -> TokensResult<ValidationReport> {
    let mut report = ValidationReport::new();

    for css_file in &config.css_files {
        let text = tokio::fs::read_to_string(css_file)
            .await
            .with_io_context(&format!("Failed to read stylesheet {}", css_file.display()))?;
        validate_css(&text, css_file, &mut report);
    }

    // Aliases may point into any configured directory
    let mut definitions = Vec::new();
    for token_dir in &config.token_dirs {
        definitions.extend(load_token_dir(token_dir).await?);
    }
    if !config.token_dirs.is_empty() {
        validate_token_definitions(&definitions, &config.themable_rules(), &mut report);
    }

    log::info!(
        "Validation finished: {} passed, {} failed, {} warnings",
        report.passed(),
        report.failed(),
        report.warning_count()
    );
    Ok(report)
}
