pub mod aliases;
pub mod almacen;
pub mod configuracion;
pub mod consola;
pub mod diagnostico;
pub mod envio;
pub mod errores;
pub mod generators;
pub mod pedido;
pub mod registro;
