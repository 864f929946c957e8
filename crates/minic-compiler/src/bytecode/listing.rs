//! Decoding of textual listings back into IR items.
//!
//! The inverse of [`Program`](super::Program)'s `Display`. `PUSH n` with an
//! integer decodes to [`Ir::Push`]; the lowering engine may have produced the
//! same line from a bare `PUSH` plus [`Ir::Number`], so decoding preserves
//! the listing's lines and opcodes, not the exact item split.

use minic_core::{CompilationError, Result};

use super::{Immediate, Ir, OpCode, UnknownMnemonic};

/// Decode a listing into IR items.
///
/// Blank lines are skipped. Any other line must be a label definition
/// (`name:`) or a tab-indented instruction.
pub fn decode(text: &str) -> Result<Vec<Ir>> {
    let mut items = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        match line.strip_prefix('\t') {
            Some(instruction) => decode_instruction(instruction, line_no, &mut items)?,
            None => items.push(decode_label(line, line_no)?),
        }
    }
    Ok(items)
}

fn decode_label(line: &str, line_no: usize) -> Result<Ir> {
    match line.strip_suffix(':') {
        Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => {
            Ok(Ir::label(name))
        }
        _ => Err(CompilationError::malformed(
            line_no,
            format!("expected a label definition, found '{}'", line),
        )),
    }
}

fn decode_instruction(text: &str, line_no: usize, items: &mut Vec<Ir>) -> Result<()> {
    let (mnemonic, operand) = match text.split_once(' ') {
        Some((mnemonic, operand)) => (mnemonic, Some(operand)),
        None => (text, None),
    };
    let op: OpCode = mnemonic.parse().map_err(|err: UnknownMnemonic| {
        CompilationError::malformed(line_no, err.to_string())
    })?;

    let needs_operand = op.requires_immediate() || op.is_jump();
    match (needs_operand, operand) {
        (true, None) => {
            return Err(CompilationError::malformed(
                line_no,
                format!("{} requires an operand", op),
            ));
        }
        (false, Some(extra)) => {
            return Err(CompilationError::malformed(
                line_no,
                format!("{} takes no operand, found '{}'", op, extra),
            ));
        }
        _ => {}
    }

    match (op, operand) {
        (OpCode::Push, Some(value)) => decode_push(value, line_no, items)?,
        (op, Some(target)) if op.is_jump() => items.push(Ir::jump(op, target)),
        (OpCode::Save, None) => items.push(Ir::Save),
        (OpCode::Load, None) => items.push(Ir::Load),
        (OpCode::Ret, None) => items.push(Ir::Return),
        (OpCode::Halt, None) => items.push(Ir::Halt),
        (op, _) => items.push(Ir::Op(op)),
    }
    Ok(())
}

fn decode_push(value: &str, line_no: usize, items: &mut Vec<Ir>) -> Result<()> {
    if let Ok(number) = value.parse::<i64>() {
        items.push(Ir::Push(number));
        return Ok(());
    }

    let literal = value
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or_else(|| {
            CompilationError::malformed(line_no, format!("invalid PUSH operand '{}'", value))
        })?;
    let ch = unescape_char(literal).ok_or_else(|| {
        CompilationError::malformed(line_no, format!("invalid character literal {}", value))
    })?;
    items.push(Ir::Op(OpCode::Push));
    items.push(Ir::Number(Immediate::Char(ch)));
    Ok(())
}

/// Reverse [`char::escape_default`] for a single quoted character.
fn unescape_char(literal: &str) -> Option<char> {
    let mut chars = literal.chars();
    let ch = match chars.next()? {
        '\\' => match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'u' => {
                let hex = chars.as_str().strip_prefix('{')?.strip_suffix('}')?;
                return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
            }
            _ => return None,
        },
        ch => ch,
    };
    chars.next().is_none().then_some(ch)
}
