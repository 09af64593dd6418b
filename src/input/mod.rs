mod op;
mod parser;
mod source;

pub use op::Op;
pub use parser::{parse_line, parse_script};
pub use source::{decode_script, encoding_for_label, read_script, read_script_stdin};
