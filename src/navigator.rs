/// Posición actual dentro del mazo. Con `len == 0` está en estado vacío.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Avanza; desde la última vuelve a la primera.
    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index < self.len - 1 {
            self.index + 1
        } else {
            0
        };
    }

    /// Retrocede; desde la primera salta a la última.
    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index > 0 {
            self.index - 1
        } else {
            self.len - 1
        };
    }

    /// Tras cambiar el tamaño del mazo: si el índice se sale, vuelve a 0.
    pub fn clamp_after_mutation(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn is_first(&self) -> bool {
        !self.is_empty() && self.index == 0
    }

    pub fn is_last(&self) -> bool {
        !self.is_empty() && self.index == self.len - 1
    }
}
