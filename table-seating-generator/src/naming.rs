const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letters for the table at `index` in fill order, counting like spreadsheet
/// columns: `A` ..= `Z`, then `AA`, `AB`, .., `ZZ`, `AAA`.
#[must_use]
pub fn table_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        remaining -= 1;
        letters.push(char::from(LETTERS[remaining % LETTERS.len()]));
        remaining /= LETTERS.len();
    }
    letters.into_iter().rev().collect()
}

#[must_use]
pub fn table_name(index: usize) -> String {
    format!("Table {}", table_letters(index))
}
