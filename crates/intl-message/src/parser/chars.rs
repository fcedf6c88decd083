//! Character classes from Unicode UAX #31 used by the message grammar.

/// Unicode `Pattern_White_Space`.
pub fn is_pattern_white_space(c: char) -> bool {
    matches!(
        c,
        '\u{09}'..='\u{0D}' | ' ' | '\u{85}' | '\u{200E}' | '\u{200F}' | '\u{2028}' | '\u{2029}'
    )
}

/// Unicode `Pattern_Syntax`.
pub fn is_pattern_syntax(c: char) -> bool {
    matches!(
        c,
        '\u{21}'..='\u{2F}'
            | '\u{3A}'..='\u{40}'
            | '\u{5B}'..='\u{5E}'
            | '\u{60}'
            | '\u{7B}'..='\u{7E}'
            | '\u{A1}'..='\u{A7}'
            | '\u{A9}'
            | '\u{AB}'..='\u{AC}'
            | '\u{AE}'
            | '\u{B0}'..='\u{B1}'
            | '\u{B6}'
            | '\u{BB}'
            | '\u{BF}'
            | '\u{D7}'
            | '\u{F7}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{203E}'
            | '\u{2041}'..='\u{2053}'
            | '\u{2055}'..='\u{205E}'
            | '\u{2190}'..='\u{245F}'
            | '\u{2500}'..='\u{2775}'
            | '\u{2794}'..='\u{2BFF}'
            | '\u{2E00}'..='\u{2E7F}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3020}'
            | '\u{3030}'
            | '\u{FD3E}'..='\u{FD3F}'
            | '\u{FE45}'..='\u{FE46}'
    )
}

/// Characters allowed in argument, selector and tag names.
pub fn is_name_char(c: char) -> bool {
    !is_pattern_white_space(c) && !is_pattern_syntax(c)
}

/// Characters allowed in a number skeleton stem or option.
pub fn is_skeleton_char(c: char) -> bool {
    !is_pattern_white_space(c) && !matches!(c, '\'' | '/' | '{' | '}')
}

/// Characters allowed in a tag name: name characters plus `-` and `.`.
pub fn is_tag_name_char(c: char) -> bool {
    matches!(c, '-' | '.') || is_name_char(c)
}
