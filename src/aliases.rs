//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type NumeroPedido = String;
pub type CantidadItem = u8;
pub type Precio = f64;
pub type Opciones = Vec<String>;

/// Funcion de busqueda de variables de configuracion, por nombre
pub type BuscarVariable<'a> = &'a dyn Fn(&str) -> Option<String>;
