use crate::nlp::Language;

/// System prompt shared by every remote summarization request.
pub const SYSTEM_PROMPT: &str = "You are a professional multilingual meeting summarizer. \
Your task is to generate concise, actionable summaries of meeting transcripts while \
preserving their substantive content. Eliminate small talk, redundant discussions, and \
irrelevant details. \n\
\n\
Key requirements:\n\
- Summarize only meaningful and substantive points, including decisions, action items, key discussions, and insights.\n\
- Ensure clarity and coherence while maintaining the original intent.\n\
- Return the summary in the language requested by the user. If no language is specified, use the transcript's original language.\n\
- Only and directly return the summary, without additional comments or explanations.\n\
\n\
Your summaries should be structured, easy to read, and useful for stakeholders who need \
key takeaways without reviewing the entire transcript.";

const ENGLISH_TEMPLATE: &str = "Please summarize the following meeting transcript into \
three clear sections: 1) Overview (2-3 sentences covering meeting purpose, key \
participants, and overall outcome), 2) Key Discussion Points (bullet points with topic \
names and 1-2 sentence summaries for each major topic), and 3) Action Items (listing all \
specific tasks with responsible persons and due dates if mentioned). Maintain the \
original language used in the meeting.\n\
\n\
Summary ratio: {ratio}\n\
\n\
{transcript}";

const FRENCH_TEMPLATE: &str = "Veuillez résumer la transcription de réunion suivante en \
trois sections claires : 1) Aperçu (2-3 phrases couvrant l'objectif de la réunion, les \
participants clés et le résultat global), 2) Points de discussion clés (points avec noms \
de sujets et résumés de 1-2 phrases pour chaque sujet majeur), et 3) Points d'action \
(listant toutes les tâches spécifiques avec les personnes responsables et les dates \
d'échéance si mentionnées). Maintenez la langue originale utilisée dans la réunion.\n\
\n\
Ratio de résumé : {ratio}\n\
\n\
{transcript}";

const GERMAN_TEMPLATE: &str = "Bitte fassen Sie das folgende Besprechungsprotokoll in \
drei klare Abschnitte zusammen: 1) Überblick (2-3 Sätze zum Zweck der Besprechung, den \
wichtigsten Teilnehmern und dem Gesamtergebnis), 2) Wichtige Diskussionspunkte \
(Aufzählungspunkte mit Themennamen und 1-2 Satz-Zusammenfassungen für jedes Hauptthema) \
und 3) Aktionspunkte (Auflistung aller spezifischen Aufgaben mit verantwortlichen \
Personen und Fälligkeitsdaten, falls erwähnt). Behalten Sie die in der Besprechung \
verwendete Originalsprache bei.\n\
\n\
Zusammenfassungsverhältnis: {ratio}\n\
\n\
{transcript}";

const SPANISH_TEMPLATE: &str = "Por favor, resume la siguiente transcripción de la \
reunión en tres secciones claras: 1) Visión general (2-3 oraciones que cubren el \
propósito de la reunión, los participantes clave y el resultado general), 2) Puntos \
clave de discusión (puntos con nombres de temas y resúmenes de 1-2 oraciones para cada \
tema principal), y 3) Elementos de acción (listando todas las tareas específicas con las \
personas responsables y las fechas de vencimiento si se mencionan). Mantén el idioma \
original utilizado en la reunión.\n\
\n\
Ratio de resumen: {ratio}\n\
\n\
{transcript}";

const PORTUGUESE_TEMPLATE: &str = "Por favor, resuma a seguinte transcrição da reunião \
em três seções claras: 1) Visão geral (2-3 frases abrangendo o propósito da reunião, os \
participantes-chave e o resultado geral), 2) Pontos-chave de discussão (tópicos com \
nomes e resumos de 1-2 frases para cada tema principal), e 3) Itens de ação (listando \
todas as tarefas específicas com as pessoas responsáveis e datas de vencimento, se \
mencionadas). Mantenha a linguagem original usada na reunião.\n\
\n\
Proporção do resumo: {ratio}\n\
\n\
{transcript}";

const ITALIAN_TEMPLATE: &str = "Si prega di riassumere la seguente trascrizione della \
riunione in tre sezioni chiare: 1) Panoramica (2-3 frasi che coprono lo scopo della \
riunione, i partecipanti chiave e il risultato complessivo), 2) Punti chiave di \
discussione (punti elenco con nomi degli argomenti e riassunti di 1-2 frasi per ogni \
argomento principale), e 3) Elementi d'azione (elenco di tutti i compiti specifici con \
le persone responsabili e le date di scadenza se menzionate). Mantenere il linguaggio \
originale utilizzato nella riunione.\n\
\n\
Rapporto di sintesi: {ratio}\n\
\n\
{transcript}";

fn template(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH_TEMPLATE,
        Language::French => FRENCH_TEMPLATE,
        Language::German => GERMAN_TEMPLATE,
        Language::Spanish => SPANISH_TEMPLATE,
        Language::Portuguese => PORTUGUESE_TEMPLATE,
        Language::Italian => ITALIAN_TEMPLATE,
    }
}

/// Build the user prompt for one request. The ratio placeholder is
/// substituted before the transcript so transcript text is never
/// re-scanned for placeholders.
pub fn build_user_prompt(language: Language, ratio: f64, transcript: &str) -> String {
    template(language)
        .replace("{ratio}", &ratio.to_string())
        .replace("{transcript}", transcript)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_ratio_and_transcript() {
        let prompt = build_user_prompt(Language::English, 0.2, "We met and decided things.");

        assert!(prompt.contains("Summary ratio: 0.2"));
        assert!(prompt.ends_with("We met and decided things."));
        assert!(!prompt.contains("{ratio}"));
        assert!(!prompt.contains("{transcript}"));
    }

    #[test]
    fn every_language_fills_its_template() {
        for language in [
            Language::English,
            Language::French,
            Language::German,
            Language::Spanish,
            Language::Portuguese,
            Language::Italian,
        ] {
            let prompt = build_user_prompt(language, 0.3, "Transcript body");
            assert!(!prompt.contains("{ratio}"), "{:?}", language);
            assert!(prompt.ends_with("Transcript body"), "{:?}", language);
        }
    }

    #[test]
    fn transcript_text_is_not_reinterpreted() {
        let prompt = build_user_prompt(Language::English, 0.5, "literal {ratio} stays");
        assert!(prompt.ends_with("literal {ratio} stays"));
    }
}
