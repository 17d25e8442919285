//! Este modulo define la interfaz con el almacen remoto de pedidos, donde
//! el agente de impresion observa las filas nuevas

pub mod supabase;

use async_trait::async_trait;

use crate::errores::ErrorAlmacen;
use crate::pedido::Pedido;

/// Tabla donde se insertan los pedidos
pub const TABLA_PEDIDOS: &str = "orders";

/// Operaciones que el generador necesita del almacen
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlmacenPedidos {
    /// Inserta un pedido como una fila nueva de la tabla
    async fn insertar(&self, tabla: &str, pedido: &Pedido) -> Result<(), ErrorAlmacen>;

    /// Lee a lo sumo una fila de la tabla, para verificar la conexion.
    /// Devuelve la cantidad de filas leidas
    async fn sondear(&self, tabla: &str) -> Result<usize, ErrorAlmacen>;
}
