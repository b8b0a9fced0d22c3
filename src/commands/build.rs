/// `build`: turn scanned flags into an encoded payload and write it out.
use serde_json::Value;

use crate::cli::output::write_payload;
use crate::cli::{Flag, OutputCtx};
use crate::payload::{KeyValue, PayloadError, encode_payload, parse_kv};
use crate::types::{ParsedOptions, ValueMap};

/// Run the whole pipeline.
///
/// Nothing is written until the payload has been fully encoded.
///
/// # Errors
///
/// Returns the first `PayloadError` hit by parsing, encoding, or writing.
pub fn run(flags: &[Flag], ctx: &OutputCtx) -> Result<(), PayloadError> {
    let t_parse = ctx.timer("parse_args");
    let opts = collect_options(flags, ctx)?;
    drop(t_parse);

    let out_file = opts.out_file.clone();
    let payload = opts.into_payload();

    let t_encode = ctx.timer("encode_payload");
    let encoded = encode_payload(&payload)?;
    drop(t_encode);

    let _t_write = ctx.timer("write_output");
    write_payload(&encoded, out_file.as_deref(), ctx)
}

/// Apply flags left to right, resolving each `key=value` as it is met.
///
/// # Errors
///
/// Returns `PayloadError::InvalidKeyValue` or `PayloadError::FileReadError`
/// from the first bad `--vars`/`--fields` value.
pub fn collect_options(flags: &[Flag], ctx: &OutputCtx) -> Result<ParsedOptions, PayloadError> {
    let mut opts = ParsedOptions::default();

    for flag in flags {
        match flag {
            Flag::Out(path) => {
                opts.out_file = Some(path.clone()).filter(|p| !p.is_empty());
            }
            Flag::Vars(kv) => insert(&mut opts.vars, parse_kv(kv)?, ctx),
            Flag::Fields(kv) => insert(&mut opts.fields, parse_kv(kv)?, ctx),
            Flag::Debug => {}
        }
    }

    Ok(opts)
}

fn insert(map: &mut ValueMap, kv: KeyValue, ctx: &OutputCtx) {
    if let Some(path) = &kv.source_file {
        ctx.note(format!(
            "read {} bytes from {path} for '{}'",
            kv.value.len(),
            kv.key
        ));
    }
    map.insert(kv.key, Value::String(kv.value));
}
