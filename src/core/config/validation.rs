use regex::Regex;
use serde_json::{Map, Value};

use crate::core::errors::RagError;

pub fn validate_config(config: &Value) -> Result<(), RagError> {
    let root = config
        .as_object()
        .ok_or_else(|| config_type_error("root", "object"))?;

    if let Some(rag) = expect_optional_object(root, "rag")? {
        validate_u64_field(rag, "rag.chunk_size", "chunk_size", 1, 10_000)?;
        validate_u64_field(rag, "rag.chunk_overlap", "chunk_overlap", 0, 10_000)?;
        validate_u64_field(rag, "rag.top_k", "top_k", 1, 100)?;
        validate_u64_field(rag, "rag.max_links", "max_links", 0, 50)?;
        validate_f64_field(rag, "rag.current_page_boost", "current_page_boost", 0.0, 1.0)?;
        validate_f64_field(rag, "rag.min_similarity", "min_similarity", 0.0, 1.0)?;
        validate_bool_field(
            rag,
            "rag.revectorize_on_idf_change",
            "revectorize_on_idf_change",
        )?;

        let chunk_size = rag.get("chunk_size").and_then(Value::as_u64);
        let overlap = rag.get("chunk_overlap").and_then(Value::as_u64);
        if let (Some(size), Some(overlap)) = (chunk_size, overlap) {
            if overlap >= size {
                return Err(RagError::Config(format!(
                    "Invalid config at 'rag.chunk_overlap': must be smaller than chunk_size ({})",
                    size
                )));
            }
        }
    }

    if let Some(fetch) = expect_optional_object(root, "fetch")? {
        validate_u64_field(fetch, "fetch.timeout_secs", "timeout_secs", 1, 300)?;
        validate_u64_field(fetch, "fetch.max_bytes", "max_bytes", 1, 100_000_000)?;
        validate_optional_string_field(fetch, "fetch.user_agent", "user_agent")?;
    }

    if let Some(context) = expect_optional_object(root, "context")? {
        validate_optional_string_field(context, "context.header", "header")?;
        if context.get("max_context_chars").is_some_and(|v| !v.is_null()) {
            validate_u64_field(
                context,
                "context.max_context_chars",
                "max_context_chars",
                1,
                10_000_000,
            )?;
        }
    }

    if let Some(scorer) = expect_optional_object(root, "url_scorer")? {
        validate_category_patterns(scorer)?;
    }

    if let Some(logging) = expect_optional_object(root, "logging")? {
        validate_optional_string_field(logging, "logging.level", "level")?;
        if logging.get("log_dir").is_some_and(|v| !v.is_null()) {
            validate_optional_string_field(logging, "logging.log_dir", "log_dir")?;
        }
    }

    Ok(())
}

fn validate_category_patterns(scorer: &Map<String, Value>) -> Result<(), RagError> {
    let Some(value) = scorer.get("extra_categories") else {
        return Ok(());
    };
    let Some(items) = value.as_array() else {
        return Err(config_type_error("url_scorer.extra_categories", "array"));
    };
    for (index, item) in items.iter().enumerate() {
        let path = format!("url_scorer.extra_categories[{}]", index);
        let entry = item
            .as_object()
            .ok_or_else(|| config_type_error(&path, "object"))?;
        validate_required_string_field(entry, &format!("{}.name", path), "name")?;
        validate_required_string_field(entry, &format!("{}.pattern", path), "pattern")?;

        let pattern = entry.get("pattern").and_then(Value::as_str).unwrap_or_default();
        if let Err(err) = Regex::new(pattern) {
            return Err(RagError::Config(format!(
                "Invalid config at '{}.pattern': {}",
                path, err
            )));
        }
    }
    Ok(())
}

fn expect_optional_object<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, RagError> {
    match root.get(key) {
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(config_type_error(key, "object")),
        None => Ok(None),
    }
}

fn validate_bool_field(
    section: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<(), RagError> {
    let Some(value) = section.get(key) else {
        return Ok(());
    };
    if value.as_bool().is_some() {
        return Ok(());
    }
    Err(config_type_error(path, "boolean"))
}

fn validate_u64_field(
    section: &Map<String, Value>,
    path: &str,
    key: &str,
    min: u64,
    max: u64,
) -> Result<(), RagError> {
    let Some(value) = section.get(key) else {
        return Ok(());
    };
    let Some(number) = value.as_u64() else {
        return Err(config_type_error(path, "integer"));
    };
    if number < min || number > max {
        return Err(RagError::Config(format!(
            "Invalid config at '{}': must be between {} and {}",
            path, min, max
        )));
    }
    Ok(())
}

fn validate_f64_field(
    section: &Map<String, Value>,
    path: &str,
    key: &str,
    min: f64,
    max: f64,
) -> Result<(), RagError> {
    let Some(value) = section.get(key) else {
        return Ok(());
    };
    let Some(number) = value.as_f64() else {
        return Err(config_type_error(path, "number"));
    };
    if !(min..=max).contains(&number) {
        return Err(RagError::Config(format!(
            "Invalid config at '{}': must be between {} and {}",
            path, min, max
        )));
    }
    Ok(())
}

fn validate_required_string_field(
    section: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<(), RagError> {
    let value = section.get(key).ok_or_else(|| {
        RagError::Config(format!("Invalid config at '{}': value is required", path))
    })?;
    let Some(text) = value.as_str() else {
        return Err(config_type_error(path, "string"));
    };
    if text.trim().is_empty() {
        return Err(RagError::Config(format!(
            "Invalid config at '{}': value cannot be empty",
            path
        )));
    }
    Ok(())
}

fn validate_optional_string_field(
    section: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<(), RagError> {
    let Some(value) = section.get(key) else {
        return Ok(());
    };
    if value.as_str().is_none() {
        return Err(config_type_error(path, "string"));
    }
    Ok(())
}

fn config_type_error(path: &str, expected: &str) -> RagError {
    RagError::Config(format!(
        "Invalid config at '{}': expected {}",
        path, expected
    ))
}
