use crate::error::AppError;
use crate::ingest::incident_csv::{ingest_incident_csv, IncidentIngestSummary};

fn demo_csv() -> String {
    // Deterministic PT/EN mixed dataset, fed through the real ingest path so
    // dashboards and tests exercise the same pipeline as a user upload.
    let mut out = String::new();
    out.push_str(
        "number,short_description,caller,state,category,assignment_group,assigned_to,priority,\
         closed,opened,updated,resolved,updated_by_tags,comments,comments_and_work_notes\n",
    );

    let descriptions = [
        "Interface travada após atualização",
        "Authentication failure ao acessar SAP",
        "Cadastro de fornecedor rejeitado",
        "Lentidão no portal de faturas",
        "API connection timeout na integração",
        "Erro de validação fiscal no Difal",
        "Replication atrasada entre ambientes",
        "Divergência de valor na Miro",
    ];
    let categories = ["Software", "Integração", "", "Fiscal"];
    let groups = ["Suporte N1", "Suporte N2", "Fiscal", ""];
    let states = ["Open", "In Progress", "Resolved", "Closed"];
    let priorities = ["1 - Critical", "2 - High", "3 - Moderate", "4 - Low"];

    for i in 1..=32usize {
        let desc = descriptions[(i - 1) % descriptions.len()];
        let category = categories[(i - 1) % categories.len()];
        let group = groups[(i - 1) % groups.len()];
        let state = states[(i - 1) % states.len()];
        let priority = priorities[(i - 1) % priorities.len()];

        // Two incidents per day across January, mixed date formats on purpose.
        let day = 1 + (i - 1) / 2;
        let opened = if i % 3 == 0 {
            format!("1/{day}/2026 08:30")
        } else {
            format!("2026-01-{day:02} 08:30:00")
        };
        let updated = format!("2026-01-{day:02} 10:00:00");
        let notes = format!("Workaround aplicado; ticket {i} acompanhado pelo suporte");

        out.push_str(&format!(
            "INC{i:07},\"{desc}\",Caller {i},{state},{category},{group},Analyst {n},{priority},,\
             {opened},{updated},,tag{i},,\"{notes}\"\n",
            n = 1 + (i - 1) % 5,
        ));
    }
    out
}

/// Seed a deterministic sample dataset through the regular CSV ingest.
pub fn seed_demo_dataset() -> Result<IncidentIngestSummary, AppError> {
    ingest_incident_csv(&demo_csv())
}
