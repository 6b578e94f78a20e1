// src/services/pdf_service.rs

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use chromiumoxide::{
    browser::{Browser, BrowserConfig},
    cdp::browser_protocol::page::{PrintToPdfParams, SetDocumentContentParams},
    page::Page,
};
use futures::StreamExt;
use tokio::{sync::Semaphore, task::JoinHandle};

use crate::{
    common::error::{RenderError, RenderStage},
    config::PdfSettings,
};

const MM_PER_INCH: f64 = 25.4;
const READY_STATE_POLL: Duration = Duration::from_millis(25);

// "interactive" já basta: o DOM está montado, imagens e fontes podem não ter chegado
fn dom_parsed(ready_state: &str) -> bool {
    matches!(ready_state, "interactive" | "complete")
}

// Papel e margens usados na impressão
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub paper_width_in: f64,
    pub paper_height_in: f64,
    pub margin_mm: f64,
    pub print_background: bool,
}

impl Default for PdfOptions {
    // A4 com fundo e 5mm de margem em todos os lados
    fn default() -> Self {
        Self {
            paper_width_in: 8.27,
            paper_height_in: 11.69,
            margin_mm: 5.0,
            print_background: true,
        }
    }
}

impl PdfOptions {
    pub fn margin_in(&self) -> f64 {
        self.margin_mm / MM_PER_INCH
    }

    fn to_params(&self) -> PrintToPdfParams {
        let margin = self.margin_in();
        PrintToPdfParams::builder()
            .print_background(self.print_background)
            .paper_width(self.paper_width_in)
            .paper_height(self.paper_height_in)
            .margin_top(margin)
            .margin_bottom(margin)
            .margin_left(margin)
            .margin_right(margin)
            .build()
    }
}

/// Abre sessões de navegador headless. Cada sessão é exclusiva de um render.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, RenderError>;
}

#[async_trait]
pub trait BrowserSession: Send {
    /// Carrega o HTML como conteúdo da página (espera o DOM, não os recursos) e imprime.
    async fn render_pdf(&mut self, html: &str, options: &PdfOptions) -> Result<Vec<u8>, RenderError>;

    /// Encerra o processo do navegador. Nunca falha: problemas viram log.
    async fn release(self: Box<Self>);
}

#[derive(Clone)]
pub struct PdfService {
    launcher: Arc<dyn BrowserLauncher>,
    permits: Arc<Semaphore>,
    options: PdfOptions,
    timeout: Duration,
}

impl PdfService {
    pub fn new(launcher: Arc<dyn BrowserLauncher>, settings: &PdfSettings) -> Self {
        Self {
            launcher,
            permits: Arc::new(Semaphore::new(settings.max_concurrent_renders)),
            options: PdfOptions::default(),
            timeout: settings.render_timeout,
        }
    }

    pub fn with_options(mut self, options: PdfOptions) -> Self {
        self.options = options;
        self
    }

    /// Gera o PDF numa task própria: mesmo que quem chamou desista (cliente
    /// desconectou), a sessão do navegador é liberada até o fim.
    pub async fn render(&self, html: String) -> Result<Vec<u8>, RenderError> {
        let service = self.clone();
        tokio::spawn(async move { service.render_scoped(&html).await })
            .await
            .map_err(|e| RenderError::new(RenderStage::Print, format!("task de render abortada: {}", e)))?
    }

    async fn render_scoped(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        // Limita quantos navegadores ficam abertos ao mesmo tempo
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| RenderError::new(RenderStage::Launch, e))?;

        let mut session = match tokio::time::timeout(self.timeout, self.launcher.launch()).await {
            Ok(Ok(session)) => session,
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(RenderError::new(RenderStage::Timeout, "tempo esgotado ao abrir o navegador"))
            }
        };

        let outcome =
            tokio::time::timeout(self.timeout, session.render_pdf(html, &self.options)).await;

        // Libera SEMPRE, antes de olhar o resultado
        session.release().await;

        match outcome {
            Ok(Ok(pdf)) => {
                tracing::info!("PDF gerado ({} bytes)", pdf.len());
                Ok(pdf)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(RenderError::new(
                RenderStage::Timeout,
                format!("render excedeu {}s", self.timeout.as_secs()),
            )),
        }
    }
}

// --- Implementação real com Chromium ---

pub struct ChromiumLauncher {
    settings: PdfSettings,
}

impl ChromiumLauncher {
    pub fn new(settings: PdfSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl BrowserLauncher for ChromiumLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, RenderError> {
        let mut builder = BrowserConfig::builder();
        if let Some(path) = &self.settings.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        if self.settings.no_sandbox {
            builder = builder.no_sandbox();
        }
        let config = builder
            .build()
            .map_err(|e| RenderError::new(RenderStage::Launch, e))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::new(RenderStage::Launch, e))?;

        // O handler precisa ser consumido para o CDP funcionar
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Box::new(ChromiumSession { browser, handler_task }))
    }
}

struct ChromiumSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn render_pdf(&mut self, html: &str, options: &PdfOptions) -> Result<Vec<u8>, RenderError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::new(RenderStage::Content, e))?;

        load_document(&page, html).await?;

        page.pdf(options.to_params())
            .await
            .map_err(|e| RenderError::new(RenderStage::Print, e))
    }

    async fn release(self: Box<Self>) {
        let mut session = *self;

        if let Err(e) = session.browser.close().await {
            tracing::warn!("Falha ao fechar o navegador, forçando kill: {}", e);
            if let Some(Err(e)) = session.browser.kill().await {
                tracing::warn!("Falha ao matar o processo do navegador: {}", e);
            }
        }
        if let Err(e) = session.browser.wait().await {
            tracing::warn!("Falha ao aguardar o fim do navegador: {}", e);
        }
    }
}

// Troca o documento do frame principal sem esperar o evento `load`
async fn load_document(page: &Page, html: &str) -> Result<(), RenderError> {
    let frame_id = page
        .mainframe()
        .await
        .map_err(|e| RenderError::new(RenderStage::Content, e))?
        .ok_or_else(|| RenderError::new(RenderStage::Content, "página sem frame principal"))?;

    page.execute(SetDocumentContentParams::new(frame_id, html))
        .await
        .map_err(|e| RenderError::new(RenderStage::Content, e))?;

    loop {
        let ready_state: String = page
            .evaluate("document.readyState")
            .await
            .map_err(|e| RenderError::new(RenderStage::Content, e))?
            .into_value()
            .map_err(|e| RenderError::new(RenderStage::Content, e))?;

        if dom_parsed(&ready_state) {
            return Ok(());
        }
        tokio::time::sleep(READY_STATE_POLL).await;
    }
}

impl Drop for ChromiumSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}
