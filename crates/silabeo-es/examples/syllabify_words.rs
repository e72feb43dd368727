// Walk through a handful of words: syllables, rule labels, and the error path.
use silabeo_es::syllabify;

fn main() {
    let words: Vec<String> = {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.is_empty() {
            [
                "casa",
                "Chocolate",
                "abril",
                "arroz",
                "aire",
                "María",
                "murciélago",
                "transporte",
                "pingüino",
                "hola123",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect()
        } else {
            args
        }
    };

    for word in &words {
        match syllabify(word) {
            Ok(result) => {
                println!(
                    "{:15} → {:20} ({} syllables)",
                    word,
                    result.joined("-"),
                    result.syllable_count()
                );
                for rule in &result.rules {
                    println!("  {rule}");
                }
            }
            Err(e) => println!("{:15} → {e}", word),
        }
    }
}
