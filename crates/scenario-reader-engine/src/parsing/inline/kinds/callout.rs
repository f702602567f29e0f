/// Angle-bracket callout `<...>`.
///
/// Callouts are raw zones: nothing inside them is highlighted further.
pub struct AngleCallout;

impl AngleCallout {
    pub const OPEN: char = '<';
    pub const CLOSE: char = '>';

    /// At least one character between the delimiters, on a single line.
    pub fn pattern() -> String {
        delimited(Self::OPEN, Self::CLOSE)
    }
}

/// CJK lenticular-bracket callout `【...】`.
pub struct BracketCallout;

impl BracketCallout {
    pub const OPEN: char = '【';
    pub const CLOSE: char = '】';

    pub fn pattern() -> String {
        delimited(Self::OPEN, Self::CLOSE)
    }
}

fn delimited(open: char, close: char) -> String {
    let open = regex::escape(open.encode_utf8(&mut [0; 4]));
    let close = regex::escape(close.encode_utf8(&mut [0; 4]));
    format!(r"{open}[^{close}\n]+{close}")
}
