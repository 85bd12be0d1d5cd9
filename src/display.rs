use crate::pokemon::Pokemon;

/// Format the terminal summary of a Pokémon, optionally followed by its
/// rendered sprite.
pub fn summary(pokemon: &Pokemon, sprite: Option<&str>) -> String {
    let name = pokemon
        .name
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let id = pokemon
        .id
        .map(|id| format!("#{:03}", id))
        .unwrap_or_else(|| "#???".to_string());
    let header = format!("=== {} {} ===", name, id);
    let separator = "=".repeat(header.chars().count());

    let types = pokemon
        .types
        .iter()
        .filter_map(|slot| slot.r#type.as_ref()?.name.as_deref())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("/");

    let abilities = pokemon
        .abilities
        .iter()
        .filter_map(|slot| {
            let name = slot.ability.as_ref()?.name.as_deref()?;
            let mut label = capitalize(&name.replace('-', " "));
            if slot.is_hidden {
                label.push_str(" (Hidden)");
            }
            Some(label)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        separator.clone(),
        header,
        separator.clone(),
        format!("Type: {}", types),
        format!("Height: {} m", tenths(pokemon.height)),
        format!("Weight: {} kg", tenths(pokemon.weight)),
        format!("Abilities: {}", abilities),
    ];

    // Entries without a stat reference have nothing to label
    let stats: Vec<String> = pokemon
        .stats
        .iter()
        .filter_map(|entry| {
            let name = entry.stat.as_ref()?.name_or_empty();
            if name.is_empty() {
                return None;
            }
            let value = entry
                .base_stat
                .map(|value| value.to_string())
                .unwrap_or_else(|| "?".to_string());
            Some(format!("{}: {}", name.replace('-', " ").to_uppercase(), value))
        })
        .collect();

    if !stats.is_empty() {
        lines.push(String::new());
        lines.push("Base Stats:".to_string());
        lines.extend(stats);
    }

    lines.push(String::new());
    match sprite {
        Some(art) => {
            lines.push("Sprite:".to_string());
            lines.push(art.to_string());
        }
        None => lines.push("No sprite available.".to_string()),
    }
    lines.push(separator);

    lines.join("\n")
}

// Decimeters to meters, hectograms to kilograms
fn tenths(value: Option<i32>) -> String {
    match value {
        Some(value) => format!("{:.1}", f64::from(value) / 10.0),
        None => "?".to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
