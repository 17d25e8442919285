//! Este modulo permite generar pedidos de prueba aleatorios, con platos de
//! la carta del restaurante, cantidades, opciones y comentarios elegidos al
//! azar. El pedido generado queda listo para ser insertado en la tabla de
//! pedidos, en estado pendiente de impresion.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::aliases::{CantidadItem, NumeroPedido, Precio};
use crate::pedido::{Item, Pedido};

/// Carta del restaurante, con el precio unitario de cada plato
pub const CARTA: [(&str, Precio); 4] = [
    ("Ramen Miso", 12.5),
    ("Ramen Shoyu", 11.5),
    ("Ramen Tonkotsu", 13.5),
    ("Ramen Vegan", 12.0),
];

/// Precio usado si un plato no figura en la carta
pub const PRECIO_POR_DEFECTO: Precio = 10.0;

pub const OPCIONES: [&str; 4] = ["Extra chashu", "Sans oignons", "Œuf mariné", "Piment lvl 3"];
pub const MAX_OPCIONES: usize = 2;
pub const RANGO_CANTIDAD: (CantidadItem, CantidadItem) = (1, 3);
pub const ITEMS_POR_PEDIDO: usize = 2;

pub const COMENTARIO: &str = "Bien chaud SVP";
pub const PROBABILIDAD_COMENTARIO: f64 = 0.3;

pub const PREFIJO_PEDIDO: &str = "TEST-";
pub const ESTADO_PENDIENTE_IMPRESION: &str = "pending_print";
pub const PAGO_PAGADO: &str = "paid";
pub const PAGO_PENDIENTE: &str = "pending";
pub const PROBABILIDAD_PAGADO: f64 = 0.5;
pub const NOMBRE_CLIENTE: &str = "Client Test Ubuntu";
pub const TELEFONO_CLIENTE: &str = "0600000000";

/// Busca el precio de un plato en la carta
pub fn precio_de(nombre: &str) -> Precio {
    CARTA
        .iter()
        .find(|(plato, _)| *plato == nombre)
        .map(|(_, precio)| *precio)
        .unwrap_or(PRECIO_POR_DEFECTO)
}

/// Arma el numero de pedido a partir del instante de creacion, en milisegundos
pub fn numero_pedido(creado: DateTime<Utc>) -> NumeroPedido {
    format!("{}{}", PREFIJO_PEDIDO, creado.timestamp_millis())
}

/// Genera un item aleatorio de la carta. Las opciones se eligen con
/// reposicion, por lo que pueden repetirse
pub fn generar_item<R: Rng + ?Sized>(rng: &mut R) -> Item {
    let (nombre, _) = CARTA[rng.gen_range(0..CARTA.len())];
    let cantidad = rng.gen_range(RANGO_CANTIDAD.0..=RANGO_CANTIDAD.1);

    let cant_opciones = rng.gen_range(0..=MAX_OPCIONES);
    let opciones = (0..cant_opciones)
        .map(|_| OPCIONES[rng.gen_range(0..OPCIONES.len())].to_string())
        .collect();

    let comentario = rng
        .gen_bool(PROBABILIDAD_COMENTARIO)
        .then(|| COMENTARIO.to_string());

    Item {
        name: nombre.to_string(),
        quantity: cantidad,
        price: precio_de(nombre),
        options: opciones,
        comment: comentario,
    }
}

/// Genera un pedido de prueba completo, con items independientes entre si
pub fn generar_pedido<R: Rng + ?Sized>(rng: &mut R, creado: DateTime<Utc>) -> Pedido {
    let items = (0..ITEMS_POR_PEDIDO)
        .map(|_| generar_item(&mut *rng))
        .collect();

    let estado_pago = if rng.gen_bool(PROBABILIDAD_PAGADO) {
        PAGO_PAGADO
    } else {
        PAGO_PENDIENTE
    };

    Pedido {
        order_number: numero_pedido(creado),
        status: ESTADO_PENDIENTE_IMPRESION.to_string(),
        customer_name: NOMBRE_CLIENTE.to_string(),
        customer_phone: TELEFONO_CLIENTE.to_string(),
        payment_status: estado_pago.to_string(),
        items,
    }
}
