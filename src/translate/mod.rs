use std::collections::BTreeSet;

/// Hand-authored PT/EN dictionary for common support vocabulary, used to
/// broaden the free-text search box.
///
/// The table is deliberately asymmetric: not every translation has a reverse
/// entry, and expansion is one hop only. Changing either is a product
/// decision, not a cleanup.
const TRANSLATIONS: &[(&str, &[&str])] = &[
    // Sistemas
    ("sap", &["sap"]),
    ("email", &["email", "mail", "outlook", "exchange"]),
    ("rede", &["network", "net", "connection", "connectivity"]),
    ("network", &["rede", "conexão"]),
    ("internet", &["internet", "web"]),
    ("sistema", &["system", "application", "app"]),
    ("system", &["sistema", "aplicação"]),
    // Problemas técnicos
    ("login", &["login", "logon", "authentication", "auth", "signin", "sign-in"]),
    ("senha", &["password", "pwd", "pass"]),
    ("password", &["senha"]),
    ("acesso", &["access", "permission", "authorization"]),
    ("access", &["acesso", "permissão"]),
    ("erro", &["error", "fail", "failure", "issue", "problem"]),
    ("error", &["erro", "falha", "problema"]),
    ("falha", &["failure", "fail", "error", "crash"]),
    ("failure", &["falha", "erro"]),
    ("lento", &["slow", "performance", "lag"]),
    ("slow", &["lento", "performance"]),
    ("travado", &["freeze", "frozen", "hang", "stuck"]),
    ("freeze", &["travado", "congelado"]),
    // Hardware
    ("impressora", &["printer", "print"]),
    ("printer", &["impressora"]),
    ("computador", &["computer", "pc", "desktop", "laptop"]),
    ("computer", &["computador"]),
    ("monitor", &["monitor", "screen", "display"]),
    ("screen", &["tela", "monitor"]),
    ("teclado", &["keyboard"]),
    ("keyboard", &["teclado"]),
    ("mouse", &["mouse"]),
    // Software
    ("software", &["software", "program", "application"]),
    ("programa", &["program", "software", "application"]),
    ("aplicação", &["application", "app", "software"]),
    ("application", &["aplicação", "programa"]),
    ("navegador", &["browser", "chrome", "firefox", "edge"]),
    ("browser", &["navegador"]),
    ("antivirus", &["antivirus", "antimalware"]),
    // Ações
    ("instalar", &["install", "setup", "deployment"]),
    ("install", &["instalar", "instalação"]),
    ("atualizar", &["update", "upgrade", "patch"]),
    ("update", &["atualizar", "atualização"]),
    ("configurar", &["configure", "config", "setup"]),
    ("configure", &["configurar", "configuração"]),
    ("backup", &["backup", "restore"]),
    ("restaurar", &["restore", "recovery"]),
    ("restore", &["restaurar", "recuperar"]),
    // Status
    ("ativo", &["active", "enabled", "on"]),
    ("active", &["ativo", "habilitado"]),
    ("inativo", &["inactive", "disabled", "off"]),
    ("inactive", &["inativo", "desabilitado"]),
    ("disponível", &["available", "online"]),
    ("available", &["disponível"]),
    ("indisponível", &["unavailable", "offline", "down"]),
    ("unavailable", &["indisponível"]),
    // Departamentos/Áreas
    ("ti", &["it", "tech", "technology"]),
    ("it", &["ti", "tecnologia"]),
    ("rh", &["hr", "human resources"]),
    ("hr", &["rh", "recursos humanos"]),
    ("financeiro", &["finance", "financial"]),
    ("finance", &["financeiro"]),
    ("vendas", &["sales", "sell"]),
    ("sales", &["vendas"]),
    ("suporte", &["support", "help"]),
    ("support", &["suporte", "ajuda"]),
    // Prioridades
    ("urgente", &["urgent", "critical", "emergency"]),
    ("urgent", &["urgente", "crítico"]),
    ("crítico", &["critical", "urgent", "emergency"]),
    ("critical", &["crítico", "urgente"]),
    ("normal", &["normal", "medium"]),
    ("baixo", &["low", "minor"]),
    ("low", &["baixo", "menor"]),
    // Outros termos comuns
    ("usuário", &["user", "client", "customer"]),
    ("user", &["usuário", "cliente"]),
    ("cliente", &["client", "customer", "user"]),
    ("client", &["cliente", "usuário"]),
    ("servidor", &["server", "host"]),
    ("server", &["servidor"]),
    ("banco", &["database", "db", "data"]),
    ("database", &["banco", "dados"]),
    ("dados", &["data", "database", "information"]),
    ("data", &["dados", "informação"]),
    ("arquivo", &["file", "document"]),
    ("file", &["arquivo", "documento"]),
    ("documento", &["document", "file"]),
    ("document", &["documento", "arquivo"]),
    ("relatório", &["report", "reporting"]),
    ("report", &["relatório"]),
    ("integração", &["integration", "interface"]),
    ("integration", &["integração"]),
    ("api", &["api", "interface"]),
    ("interface", &["interface", "ui", "gui"]),
    ("segurança", &["security", "secure"]),
    ("security", &["segurança"]),
    ("licença", &["license", "licensing"]),
    ("license", &["licença"]),
    ("versão", &["version", "release"]),
    ("version", &["versão"]),
    ("teste", &["test", "testing"]),
    ("test", &["teste"]),
    ("produção", &["production", "prod", "live"]),
    ("production", &["produção"]),
    ("desenvolvimento", &["development", "dev"]),
    ("development", &["desenvolvimento"]),
];

/// All equivalent forms of a search term: the term itself, its direct
/// translations, and — for every entry whose translation list contains the
/// term — that entry's key plus its other translations. One hop only; the
/// result is never closed transitively.
pub fn search_variations(term: &str) -> BTreeSet<String> {
    let normalized = term.trim().to_lowercase();
    let mut variations = BTreeSet::new();
    if normalized.is_empty() {
        return variations;
    }
    variations.insert(normalized.clone());

    for (key, terms) in TRANSLATIONS {
        if *key == normalized {
            for t in *terms {
                variations.insert(t.to_lowercase());
            }
        }
        if terms.iter().any(|t| t.to_lowercase() == normalized) {
            variations.insert((*key).to_lowercase());
            for t in *terms {
                variations.insert(t.to_lowercase());
            }
        }
    }
    variations
}

/// True when the lower-cased text contains any variation of the term as a
/// substring. Best-effort usability helper for free-text search.
pub fn text_matches_search(text: &str, term: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let haystack = text.to_lowercase();
    search_variations(term)
        .iter()
        .any(|v| haystack.contains(v.as_str()))
}
