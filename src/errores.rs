//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::fmt;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeConfiguracion(ErrorConfiguracion),
    ErrorDeAlmacen(ErrorAlmacen),
}

impl From<ErrorConfiguracion> for Error {
    fn from(err: ErrorConfiguracion) -> Self {
        Error::ErrorDeConfiguracion(err)
    }
}

impl From<ErrorAlmacen> for Error {
    fn from(err: ErrorAlmacen) -> Self {
        Error::ErrorDeAlmacen(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ErrorDeConfiguracion(e) => write!(f, "{}", e),
            Error::ErrorDeAlmacen(e) => write!(f, "{}", e),
        }
    }
}

/// Enumerativo que define los errores al leer la configuracion
/// de conexion con el almacen
#[derive(Debug, PartialEq)]
pub enum ErrorConfiguracion {
    VariableFaltante(String),
    UrlInvalida(String),
    ClaveInvalida,
}

impl fmt::Display for ErrorConfiguracion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::VariableFaltante(nombre) => write!(f, "falta la variable {}", nombre),
            Self::UrlInvalida(motivo) => write!(f, "url del almacen invalida: {}", motivo),
            Self::ClaveInvalida => write!(f, "la clave de acceso no es un header valido"),
        }
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// al hablar con el almacen remoto
#[derive(Debug)]
pub enum ErrorAlmacen {
    /// No se pudo crear el cliente
    Construccion(String),
    /// El almacen respondio, pero rechazo la operacion
    Rechazo { estado: u16, detalle: String },
    /// La solicitud no llego a completarse
    Transporte(String),
    /// La respuesta no tenia el formato esperado
    Decodificacion(String),
}

impl fmt::Display for ErrorAlmacen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Construccion(motivo) => write!(f, "no se pudo crear el cliente: {}", motivo),
            Self::Rechazo { estado, detalle } => write!(f, "[{}] {}", estado, detalle),
            Self::Transporte(motivo) => write!(f, "fallo de red: {}", motivo),
            Self::Decodificacion(motivo) => write!(f, "respuesta ilegible: {}", motivo),
        }
    }
}

impl From<ErrorConfiguracion> for ErrorAlmacen {
    fn from(err: ErrorConfiguracion) -> Self {
        ErrorAlmacen::Construccion(err.to_string())
    }
}

impl From<reqwest::Error> for ErrorAlmacen {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ErrorAlmacen::Decodificacion(err.to_string())
        } else if err.is_builder() {
            ErrorAlmacen::Construccion(err.to_string())
        } else {
            ErrorAlmacen::Transporte(err.to_string())
        }
    }
}
