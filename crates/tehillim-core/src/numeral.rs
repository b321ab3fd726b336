//! Hebrew alphabetic numerals for chapter numbers.

const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
const HUNDREDS: [&str; 5] = ["", "ק", "ר", "ש", "ת"];

const GERESH: char = '\u{05F3}';
const GERSHAYIM: char = '\u{05F4}';

/// Render `num` (1..=499) as a Hebrew numeral.
///
/// 15 and 16 are written ט״ו and ט״ז instead of י״ה and י״ו. A multi-letter
/// numeral gets gershayim before its last letter; a single letter gets a
/// trailing geresh. Values without a representation render as an empty string.
pub fn to_hebrew_numeral(num: u32) -> String {
    match num {
        15 => return format!("ט{GERSHAYIM}ו"),
        16 => return format!("ט{GERSHAYIM}ז"),
        _ => {}
    }

    let h = (num / 100) as usize;
    let t = ((num % 100) / 10) as usize;
    let o = (num % 10) as usize;

    let Some(hundreds) = HUNDREDS.get(h) else {
        return String::new();
    };
    let letters: Vec<char> = [*hundreds, TENS[t], ONES[o]]
        .concat()
        .chars()
        .collect();

    match letters.split_last() {
        None => String::new(),
        Some((last, [])) => format!("{last}{GERESH}"),
        Some((last, rest)) => {
            let mut out: String = rest.iter().collect();
            out.push(GERSHAYIM);
            out.push(*last);
            out
        }
    }
}
