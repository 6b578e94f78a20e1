// src/services/modal.rs

// Um único estado para os modais: não existe "adicionar" e "excluir" abertos ao mesmo tempo.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState<E> {
    #[default]
    Closed,
    Adding,
    Editing(E),
    ConfirmingDelete(E),
}

impl<E> ModalState<E> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, ModalState::Adding)
    }

    pub fn editing(&self) -> Option<&E> {
        match self {
            ModalState::Editing(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn confirming_delete(&self) -> Option<&E> {
        match self {
            ModalState::ConfirmingDelete(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_modal_replaces_the_current_one() {
        let mut modal: ModalState<&str> = ModalState::Adding;
        assert!(modal.is_adding());

        modal = ModalState::ConfirmingDelete("SKU-1");
        assert!(!modal.is_adding());
        assert_eq!(modal.confirming_delete(), Some(&"SKU-1"));
        assert_eq!(modal.editing(), None);

        modal.close();
        assert!(!modal.is_open());
    }
}
