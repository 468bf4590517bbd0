use serde_json::{json, Value};

/// A complete profile exercising every section the generators read.
pub fn sample_profile() -> Value {
    json!({
        "personal": {
            "name": "Jane Doe",
            "location": "Berlin, Germany",
            "email": "jane@example.com",
            "phone": "+49 000 000",
            "telegram": "janedoe",
            "github": "janedoe",
            "linkedin": "jane-doe",
            "open_to": "Remote",
            "tagline": "Low-latency systems & data pipelines",
            "hiring_notice": "Open to senior backend roles"
        },
        "meta": {
            "title": "Jane Doe | Backend Engineer",
            "description": "Portfolio of Jane Doe",
            "keywords": "rust, backend, ml",
            "theme_color": "#7c3aed"
        },
        "titles": {
            "backend": "Senior Backend Engineer",
            "ml": "ML Engineer",
            "techlead": "Tech Lead",
            "quant": "Quantitative Developer",
            "portfolio": "Backend & ML Engineer"
        },
        "summaries": {
            "backend": "Backend engineer with seven years of experience building services.",
            "ml": "Engineer training and serving models in production.",
            "techlead": "Leads small teams shipping distributed systems.",
            "quant": "Builds market data pipelines and trading models.",
            "portfolio": "I build <fast> systems & the tooling around them."
        },
        "skills": {
            "languages": { "label": "Languages", "items": ["Rust", "Python", "Go"] },
            "backend": { "label": "Backend", "items": ["FastAPI", "gRPC"] },
            "ml_data": { "label": "ML & Data", "items": ["PyTorch", "Pandas"] },
            "databases": { "label": "Databases", "items": ["PostgreSQL", "Redis"] },
            "leadership": { "label": "Leadership", "items": ["Mentoring", "Hiring"] },
            "trading": { "label": "Trading", "items": ["Market making"] }
        },
        "experience": [
            {
                "title": "Senior Engineer",
                "company": "Acme",
                "product": "Exchange",
                "period": "2021 - Present",
                "location": "Remote",
                "bullets": ["Did X", "Ran the on-call rotation"],
                "bullets_ml": ["Did X for ML"],
                "bullets_quant": ["Q1", "Q2", "Q3", "Q4"],
                "tech": ["Rust", "Kafka"]
            },
            {
                "title": "Engineer",
                "company": "Globex",
                "period": "2018 - 2021",
                "bullets": ["Built the billing service"]
            },
            {
                "title": "Intern",
                "company": "Initech",
                "bullets": ["Wrote tests"]
            }
        ],
        "education": [
            { "title": "Cert A", "institution": "Org", "status": "In progress" }
        ],
        "languages": { "english": "C1", "german": "B2" },
        "projects": [
            {
                "title": "Wallet Orchestrator",
                "description": "Runs 2,000+ wallets",
                "metrics": [{ "value": "5K", "label": "daily txs" }],
                "tech": ["Rust"]
            },
            { "title": "Scratchpad", "description": "Not ready", "featured": false }
        ],
        "stats": [
            { "value": 200, "suffix": "+", "label": "rps" },
            { "value": "99%", "label": "uptime" }
        ],
        "social": {
            "github": "https://github.com/janedoe",
            "telegram": "https://t.me/janedoe",
            "email": "mailto:jane@example.com"
        },
        "trading_experience": [
            { "title": "Prop Trader", "company": "Self", "period": "2020", "bullets": ["Ran a book"] }
        ],
        "quant_projects": [
            { "title": "Candle Collector", "bullets": ["Collected 260M candles"] }
        ]
    })
}

/// `sample_profile` with one `personal` field removed.
pub fn without_personal_field(field: &str) -> Value {
    let mut profile = sample_profile();
    if let Some(personal) = profile.get_mut("personal").and_then(Value::as_object_mut) {
        personal.remove(field);
    }
    profile
}

/// `sample_profile` with one top-level section removed.
pub fn without_section(key: &str) -> Value {
    let mut profile = sample_profile();
    if let Some(root) = profile.as_object_mut() {
        root.remove(key);
    }
    profile
}
