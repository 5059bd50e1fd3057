//! The token cursor and the option-run consumption loop.

use crate::coerce;
use crate::error::{BindError, Result};
use crate::schema::{FieldTable, OptionSet};

/// Sequential cursor over a command-line token sequence.
///
/// The cursor is shared across every call on the same instance and only
/// moves forward. A positional read followed by an option-run read is how
/// nested sub-commands each consume their own slice of one underlying
/// sequence: the outer command reads its options, the sub-command name is
/// the next positional token, and the sub-command reads its own options
/// from where the outer run stopped.
pub struct ArgCursor {
    tokens: Vec<String>,
    pos: usize,
}

impl ArgCursor {
    /// Create a cursor over an ordered token sequence.
    ///
    /// The sequence is conventionally a program's command-line arguments
    /// with the program name already excluded by the caller.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Create a cursor over the process arguments, program name excluded.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1).collect())
    }

    /// Return and consume the next positional token.
    ///
    /// Returns the empty string once the sequence is exhausted.
    pub fn next_arg(&mut self) -> String {
        if self.pos >= self.tokens.len() {
            return String::new();
        }
        self.pos += 1;
        self.tokens[self.pos - 1].clone()
    }

    /// Return every unconsumed token and mark the cursor exhausted.
    pub fn remaining_args(&mut self) -> Vec<String> {
        let rest = self.tokens[self.pos..].to_vec();
        self.pos = self.tokens.len();
        rest
    }

    /// Consume a contiguous run of option tokens into `options`.
    ///
    /// Walks tokens from the cursor until the first token without a leading
    /// dash (left unconsumed, for the caller's next positional read) or the
    /// end of the input. `--name` tokens carry one alias; `-abc` tokens
    /// carry one single-character alias per character and may only name
    /// boolean flags, since a bundle leaves no unambiguous token to carry a
    /// value. An option whose field is not boolean claims the following
    /// token as its value.
    ///
    /// On error the cursor stays at the start of the run; fields assigned
    /// before the failure keep their values.
    pub fn next_options<O: OptionSet>(&mut self, options: &mut O) -> Result<()> {
        let mut table = FieldTable::new(options.fields())?;
        // Index of the multipart field waiting for its value, together with
        // the alias the caller used to select it.
        let mut pending: Option<(usize, String)> = None;

        let mut i = self.pos;
        while i < self.tokens.len() {
            let token = self.tokens[i].as_str();

            if let Some((index, _)) = pending.take() {
                // The previous option claims this token as its value,
                // whatever it looks like
                coerce::assign(table.slot_mut(index), token)?;
            } else if !token.starts_with('-') {
                // Not an option: the run ends here
                self.pos = i;
                return Ok(());
            } else if let Some(alias) = token.strip_prefix("--") {
                // Long form: the remainder is a single alias
                enter_option(&mut table, &mut pending, alias)?;
            } else {
                // Short form: each remaining character is an alias
                let name = &token[1..];
                if name.chars().count() > 1 {
                    // Bundled flags, boolean fields only
                    for ch in name.chars() {
                        let alias = ch.to_string();
                        let index = table.resolve(&alias)?;
                        if !table.is_switch(index) {
                            return Err(BindError::BundledMultipart(alias));
                        }
                        coerce::assign(table.slot_mut(index), "true")?;
                    }
                } else {
                    enter_option(&mut table, &mut pending, name)?;
                }
            }
            i += 1;
        }

        if let Some((_, alias)) = pending {
            return Err(BindError::MissingValue(alias));
        }
        self.pos = self.tokens.len();
        Ok(())
    }
}

/// Handle one resolved option name: boolean flags are set immediately,
/// multipart fields are left pending for the following value token.
fn enter_option<'a>(
    table: &mut FieldTable<'a>,
    pending: &mut Option<(usize, String)>,
    alias: &str,
) -> Result<()> {
    let index = table.resolve(alias)?;
    if table.is_switch(index) {
        coerce::assign(table.slot_mut(index), "true")?;
    } else {
        *pending = Some((index, alias.to_string()));
    }
    Ok(())
}
