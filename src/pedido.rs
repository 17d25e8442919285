//! Este modulo define la estructura de los pedidos de prueba, tal como
//! se insertan en la tabla de pedidos del almacen remoto

use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::aliases::{CantidadItem, NumeroPedido, Opciones, Precio};

/// Un item esta definido por un plato de la carta, la cantidad pedida, su precio
/// unitario, las opciones elegidas y un comentario opcional para la cocina
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub quantity: CantidadItem,
    pub price: Precio,
    pub options: Opciones,
    pub comment: Option<String>,
}

/// Pedido completo. Se construye una unica vez y no se modifica antes de
/// ser enviado
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Pedido {
    pub order_number: NumeroPedido,
    pub status: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub payment_status: String,
    pub items: Vec<Item>,
}

impl Pedido {
    /// Total del pedido, sumando precio por cantidad de cada item
    pub fn total(&self) -> Precio {
        self.items
            .iter()
            .map(|item| item.price * Precio::from(item.quantity))
            .sum()
    }
}

impl fmt::Display for Pedido {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "pedido {} de {} items, pago {}",
            self.order_number.blue(),
            self.items.len(),
            self.payment_status
        )
    }
}
