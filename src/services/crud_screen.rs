// src/services/crud_screen.rs

use crate::{
    common::error::AppError,
    repo::EntityRepository,
    services::{form::FormState, modal::ModalState},
};

// Diferencia "lista vazia" de "falhou ao carregar"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
    Failed(String),
}

/// Esqueleto comum das telas de cadastro: lista + modal de criar/editar/excluir.
///
/// O servidor é a única fonte da verdade. Toda mutação bem-sucedida é seguida
/// de um `reload`; não há atualização otimista da lista local.
pub struct CrudScreen<R: EntityRepository> {
    repo: R,
    items: Vec<R::Entity>,
    load_state: LoadState,
    form: FormState<R::Draft>,
    modal: ModalState<R::Entity>,
    keep_open_after_add: bool,
}

impl<R: EntityRepository> CrudScreen<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            items: Vec::new(),
            load_state: LoadState::NotLoaded,
            form: FormState::new(),
            modal: ModalState::Closed,
            keep_open_after_add: false,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn form(&self) -> &FormState<R::Draft> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState<R::Draft> {
        &mut self.form
    }

    pub fn modal(&self) -> &ModalState<R::Entity> {
        &self.modal
    }

    pub fn set_keep_open_after_add(&mut self, keep_open: bool) {
        self.keep_open_after_add = keep_open;
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        self.form.set_field(name, value)
    }

    /// Em caso de falha a lista anterior é mantida.
    pub async fn reload(&mut self) -> Result<(), AppError> {
        match self.repo.list().await {
            Ok(items) => {
                self.items = items;
                self.load_state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Erro ao carregar a lista: {}", e);
                self.load_state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    // A mutação já foi aceita pelo servidor; uma falha aqui só deixa a lista desatualizada
    async fn reload_after_mutation(&mut self) {
        if let Err(e) = self.reload().await {
            tracing::warn!("Lista não recarregada após a alteração: {}", e);
        }
    }

    // Sem o rascunho do servidor (ex: código de entrada) o formulário abre vazio
    async fn fresh_draft(&self) -> R::Draft {
        match self.repo.new_draft().await {
            Ok(draft) => draft,
            Err(e) => {
                tracing::error!("Erro ao preparar o formulário de criação: {}", e);
                R::Draft::default()
            }
        }
    }

    pub async fn open_add(&mut self) {
        let draft = self.fresh_draft().await;
        self.form.replace(draft);
        self.modal = ModalState::Adding;
    }

    pub fn open_edit(&mut self, entity: R::Entity) {
        self.form.load_from(&entity);
        self.modal = ModalState::Editing(entity);
    }

    pub fn open_delete(&mut self, entity: R::Entity) {
        self.modal = ModalState::ConfirmingDelete(entity);
    }

    pub fn close(&mut self) {
        self.modal.close();
        self.form.reset();
    }

    /// Salva o formulário aberto (criação ou edição).
    ///
    /// Rascunho inválido não gera nenhuma chamada de rede.
    pub async fn submit(&mut self) -> Result<Option<R::Entity>, AppError> {
        let editing = match &self.modal {
            ModalState::Adding => None,
            ModalState::Editing(current) => Some(current.clone()),
            _ => return Err(AppError::NoActiveForm),
        };

        if let Err(e) = self.form.check() {
            tracing::warn!("Preencha todos os campos obrigatórios: {}", e);
            return Err(e);
        }

        let echo = match &editing {
            None => self.repo.create(self.form.draft()).await,
            Some(current) => self.repo.update(current, self.form.draft()).await,
        }
        .inspect_err(|e| tracing::error!("Erro ao salvar o registro: {}", e))?;

        if editing.is_none() && self.keep_open_after_add {
            // Continua no modo "adicionar" com um rascunho novo
            let draft = self.fresh_draft().await;
            self.form.replace(draft);
        } else {
            self.close();
        }

        self.reload_after_mutation().await;
        Ok(echo)
    }

    pub async fn confirm_delete(&mut self) -> Result<(), AppError> {
        let target = match &self.modal {
            ModalState::ConfirmingDelete(entity) => entity.clone(),
            _ => return Err(AppError::NoActiveForm),
        };

        self.repo
            .delete(&target)
            .await
            .inspect_err(|e| tracing::error!("Erro ao excluir o registro: {}", e))?;

        self.modal.close();
        self.reload_after_mutation().await;
        Ok(())
    }
}
