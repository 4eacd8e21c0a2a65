use std::io::{self, Write};

use riddlepath_core::StageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedLetter {
    pub stage_id: StageId,
    pub text: String,
    pub just_added: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedLettersViewModel {
    pub letters: Vec<CollectedLetter>,
}

pub fn show<W: Write>(out: &mut W, vm: &CollectedLettersViewModel) -> io::Result<()> {
    if vm.letters.is_empty() {
        return Ok(());
    }
    let letters: Vec<String> = vm
        .letters
        .iter()
        .map(|letter| {
            if letter.just_added {
                format!("*{}*", letter.text)
            } else {
                letter.text.clone()
            }
        })
        .collect();
    writeln!(out, "Letters: {}", letters.join(" "))
}
