//! Lineas de estado para el operador, con emoji y color. Se escriben sobre
//! un par de salidas intercambiables para poder capturarlas en los tests

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use colored::Colorize;

pub struct Consola<S: Write, E: Write> {
    salida: S,
    errores: E,
}

impl Consola<Stdout, Stderr> {
    /// Consola sobre la salida y el error estandar del proceso
    pub fn estandar() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<S: Write, E: Write> Consola<S, E> {
    pub fn new(salida: S, errores: E) -> Self {
        Self { salida, errores }
    }

    pub fn info(&mut self, mensaje: impl Display) {
        Self::escribir(&mut self.salida, "🧪", mensaje.to_string().normal());
    }

    pub fn exito(&mut self, mensaje: impl Display) {
        Self::escribir(&mut self.salida, "✅", mensaje.to_string().green());
    }

    pub fn pista(&mut self, mensaje: impl Display) {
        Self::escribir(&mut self.salida, "🎯", mensaje.to_string().cyan());
    }

    pub fn aviso(&mut self, mensaje: impl Display) {
        Self::escribir(&mut self.salida, "⚠️", mensaje.to_string().yellow());
    }

    pub fn error(&mut self, mensaje: impl Display) {
        Self::escribir(&mut self.errores, "❌", mensaje.to_string().red());
    }

    /// Devuelve las salidas, para inspeccionarlas
    pub fn into_salidas(self) -> (S, E) {
        (self.salida, self.errores)
    }

    fn escribir(destino: &mut impl Write, emoji: &str, mensaje: impl Display) {
        if writeln!(destino, "{} {}", emoji, mensaje).is_err() {
            tracing::warn!("no se pudo escribir en la consola");
        }
    }
}
