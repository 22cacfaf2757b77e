mod affine;
