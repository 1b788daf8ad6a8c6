use honggfuzz::fuzz;
use lexlist::token::{longest_run, tokens_for_line};
use lexlist::ExtractConfig;

fn main() {
    let surface = ExtractConfig::surface();
    let lemma = ExtractConfig::lemma();
    loop {
        fuzz!(|data: &[u8]| {
            for tok in tokens_for_line(data, &surface) {
                assert!(!tok.is_empty());
                assert!(tok.bytes().all(|b| b.is_ascii_lowercase()));
                assert!(longest_run(&tok) < 4);
            }
            for tok in tokens_for_line(data, &lemma) {
                assert!(tok.bytes().all(|b| b.is_ascii_lowercase()));
            }
        });
    }
}
