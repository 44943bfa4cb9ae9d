use crate::models::ServiceItem;

/// Domain matching policy, bound to the model's instruction channel.
///
/// Encodes three rules: score candidates by tag similarity, keep car and
/// bicycle services disjoint (preferring charging points for EV queries),
/// and prefer an empty result over spurious matches.
pub const SYSTEM_INSTRUCTION: &str = "Jesteś asystentem, który dopasowuje usługi do problemu użytkownika na podstawie TAGÓW. \
Twoim zadaniem jest policzenie podobieństwa każdego punktu do zapytania (0–100%) i zwrócenie tylko tych punktów, które naprawdę pasują. \
Jeśli zapytanie dotyczy samochodu/auta (np. 'auto', 'samochód', 'bateria w aucie', 'tesla'), NIE zwracaj usług rowerowych lub ogólnych, które nie są jasno związane z samochodami. \
Jeśli zapytanie dotyczy ładowania samochodu elektrycznego, preferuj punkty ładowania, a dopiero potem serwisy. \
Usługi rowerowe traktuj osobno od samochodowych – 'rower' i 'auto' to różne kategorie. \
Lepiej zwrócić pustą listę niż przypadkowe wyniki.";

/// Per-request prompt: the query plus a formatted listing of every
/// candidate, with the required output shape spelled out.
pub fn build_user_prompt(query: &str, services: &[ServiceItem]) -> String {
    let listing = services
        .iter()
        .map(|s| {
            format!(
                "ID: {}\nNazwa: {}\nKategoria: {}\nOpis: {}\nTagi: {}",
                s.id,
                s.name,
                s.category,
                s.description,
                s.tags.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Zapytanie użytkownika: \"{query}\".\n\n\
Masz następujące usługi:\n\n\
{listing}\n\n\
Zwróć JSON z jednym polem \"items\", które jest tablicą obiektów {{ \"id\": number, \"score\": number }}.\n\
Pole \"score\" to Twoja ocena dopasowania w procentach (0–100). Posortuj \"items\" malejąco po \"score\".\n\
Jeśli usługa nie pasuje, nadaj jej niski wynik (<30). Nie dodawaj żadnego innego tekstu."
    )
}
