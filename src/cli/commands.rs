use crate::form::extractor::extract_into;
use crate::form::filler::{fill_with, unmatched_fields};
use crate::form::filter::FieldFilter;
use crate::form::form_model::{DuplicatePolicy, FormObject};
use crate::scope::loader::{load_object, load_scope, object_json, snapshot_json, write_file};
use crate::scope::scope_model::DomNode;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{FieldOutcome, Operation};

// ============================================================================
// extract subcommand
// ============================================================================

pub fn cmd_extract(
    scope_path: &str,
    into: Option<&str>,
    filter: &FieldFilter,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let scope = load_scope(scope_path)?;
    let seed = match into {
        Some(path) => load_object(path)?,
        None => FormObject::new(),
    };

    if verbose > 0 {
        eprintln!(
            "Extracting {} inputs from {}...",
            scope.inputs().len(),
            scope_path
        );
    }

    let object = run_extract(&scope, seed, filter, tracer);

    if verbose > 0 {
        eprintln!("Extracted {} fields", object.len());
    }

    emit(output, &object_json(&object)?)
}

/// Extract `scope` into `seed` through `filter`, tracing each named input.
pub fn run_extract(
    scope: &DomNode,
    mut seed: FormObject,
    filter: &FieldFilter,
    tracer: &TraceLogger,
) -> FormObject {
    extract_into(scope, &mut seed, |_, name, value| {
        let allowed = filter.allows(name, value);
        let outcome = if allowed {
            FieldOutcome::Assigned
        } else {
            FieldOutcome::Filtered
        };
        tracer.log_field(Operation::Extract, name, outcome, Some(value.kind()), value);
        allowed
    });
    seed
}

// ============================================================================
// fill subcommand
// ============================================================================

pub fn cmd_fill(
    scope_path: &str,
    values_path: &str,
    policy: DuplicatePolicy,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scope = load_scope(scope_path)?;
    let values = load_object(values_path)?;

    if verbose > 0 {
        eprintln!(
            "Filling {} fields into {} (duplicates={:?})...",
            values.len(),
            scope_path,
            policy
        );
    }

    let unmatched = run_fill(&mut scope, &values, policy, tracer);

    if verbose > 0 {
        for name in &unmatched {
            eprintln!("  No input named '{}'", name);
        }
    }

    emit(output, &snapshot_json(&scope)?)
}

/// Fill `scope` from `values` and return the keys that had no target.
pub fn run_fill(
    scope: &mut DomNode,
    values: &FormObject,
    policy: DuplicatePolicy,
    tracer: &TraceLogger,
) -> Vec<String> {
    let unmatched: Vec<String> = unmatched_fields(scope, values)
        .into_iter()
        .map(str::to_string)
        .collect();

    if tracer.is_enabled() {
        for (name, value) in values {
            match scope.find_inputs(name).first() {
                Some(el) => tracer.log_field(Operation::Fill, name, FieldOutcome::Filled, Some(el.kind()), value),
                None => tracer.log_field(Operation::Fill, name, FieldOutcome::Unmatched, None, value),
            }
        }
    }

    fill_with(scope, values, policy);
    unmatched
}

// ============================================================================
// Helpers
// ============================================================================

/// Write to `output` if given, else print to stdout.
fn emit(output: Option<&str>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => write_file(path, content)?,
        None => println!("{}", content),
    }
    Ok(())
}
