//! Replace the news table with sample data.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use clap::Args;

use newsdesk_core::config::AppConfig;
use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::traits::Repository;
use newsdesk_database::NewsRepository;
use newsdesk_entity::news::CreateNews;
use newsdesk_service::{CreateNewsService, NewsRepositoryRef};

use crate::output;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// `(title, description, publication date)` of every sample item.
const SAMPLE_NEWS: [(&str, &str, (i32, u32, u32, u32, u32)); 10] = [
    (
        "Lançamento de Nova Tecnologia",
        "Uma revolucionária tecnologia foi lançada hoje, prometendo transformar o mercado de desenvolvimento de software.",
        (2024, 1, 15, 10, 0),
    ),
    (
        "Evento de Programação Atrai Milhares",
        "O maior evento de programação do ano reuniu desenvolvedores de todo o mundo para discutir as últimas tendências.",
        (2024, 2, 20, 14, 30),
    ),
    (
        "Startup Brasileira Recebe Investimento",
        "Empresa nacional de tecnologia recebe aporte milionário para expandir suas operações.",
        (2024, 3, 10, 9, 15),
    ),
    (
        "Atualização de Framework Popular",
        "Framework mais utilizado pela comunidade recebe grande atualização com novos recursos e melhorias de performance.",
        (2024, 4, 5, 16, 45),
    ),
    (
        "Conferência sobre Inteligência Artificial",
        "Especialistas se reúnem para debater o futuro da IA e suas aplicações no desenvolvimento de software.",
        (2024, 5, 18, 11, 0),
    ),
    (
        "Novo Curso Online de Desenvolvimento",
        "Plataforma de educação lança curso completo sobre desenvolvimento full stack com as tecnologias mais modernas.",
        (2024, 6, 22, 8, 30),
    ),
    (
        "Hackathon Internacional Anuncia Vencedores",
        "Times de diversos países competiram em desafio global de programação, com projetos inovadores sendo premiados.",
        (2024, 7, 30, 19, 0),
    ),
    (
        "Empresa Adota Trabalho Remoto Permanente",
        "Grande empresa de tecnologia anuncia política de trabalho remoto permanente para todos os colaboradores.",
        (2024, 8, 12, 13, 20),
    ),
    (
        "Pesquisa Revela Linguagens Mais Populares",
        "Novo estudo aponta as linguagens de programação mais utilizadas e demandadas pelo mercado atual.",
        (2024, 9, 25, 15, 40),
    ),
    (
        "Lançamento de Plataforma Open Source",
        "Comunidade de desenvolvedores lança nova plataforma open source para facilitar o desenvolvimento colaborativo.",
        (2024, 10, 8, 12, 10),
    ),
];

/// The sample news items, in insertion order.
pub fn sample_news() -> Vec<CreateNews> {
    SAMPLE_NEWS
        .iter()
        .map(|(title, description, (y, m, d, h, min))| CreateNews {
            title: (*title).to_string(),
            description: (*description).to_string(),
            publication_date: utc(*y, *m, *d, *h, *min),
        })
        .collect()
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

/// Clear `repo` and insert the sample items. Returns how many were created.
pub async fn seed(repo: NewsRepositoryRef) -> Result<usize, AppError> {
    let removed = repo.delete_all().await?;
    tracing::info!(removed, "Cleared news table");

    let create = CreateNewsService::new(repo);
    let items = sample_news();
    for item in &items {
        create.perform(item.clone()).await?;
    }
    Ok(items.len())
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, config: &AppConfig) -> Result<(), AppError> {
    if !args.force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("This will DELETE every news item, deleted ones included. Continue?")
            .default(false)
            .interact()
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Input error", e))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = super::connect(config).await?;
    let repo: NewsRepositoryRef = Arc::new(NewsRepository::new(db.pool().clone()));
    let created = seed(repo).await?;
    output::print_success(&format!("Created {created} news items."));

    db.close().await;
    Ok(())
}
